use clap::Command;
use clap::error::{Error, ErrorKind};

/// How a recognized long option consumes input.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KnownOption {
    long: String,
    takes_value: bool,
}

/// Resolves `name` against the declared long options. An exact match wins, otherwise a
/// unique prefix is expanded. `Ok(None)` means the option is not declared.
fn resolve_long<'a>(
    cmd: &mut Command,
    declared: &'a [KnownOption],
    name: &str,
) -> Result<Option<&'a KnownOption>, Error> {
    if let Some(exact) = declared.iter().find(|opt| opt.long == name) {
        return Ok(Some(exact));
    }
    if name.is_empty() {
        return Ok(None);
    }

    let candidates: Vec<&KnownOption> = declared
        .iter()
        .filter(|opt| opt.long.starts_with(name))
        .collect();
    match candidates.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(*only)),
        several => {
            let matches = several
                .iter()
                .map(|opt| format!("--{}", opt.long))
                .collect::<Vec<_>>()
                .join(", ");
            Err(cmd.error(
                ErrorKind::UnknownArgument,
                format!("ambiguous option: --{name} could match {matches}"),
            ))
        }
    }
}

/// Splits `argv` into tokens declared on `cmd` and leftovers the caller may hand to
/// another parser. Leftovers keep their original order. Unambiguous prefixes of declared
/// long options are rewritten to the full name; ambiguous ones are a usage error.
pub fn split_known_args<I, S>(cmd: &Command, argv: I) -> Result<(Vec<String>, Vec<String>), Error>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut cmd = cmd.clone();
    cmd.build();

    let declared: Vec<KnownOption> = cmd
        .get_arguments()
        .filter_map(|arg| {
            arg.get_long().map(|long| KnownOption {
                long: long.to_string(),
                takes_value: arg.get_action().takes_values(),
            })
        })
        .collect();
    let help_short = cmd
        .get_arguments()
        .find(|arg| arg.get_id() == "help")
        .and_then(|arg| arg.get_short());

    let mut known: Vec<String> = Vec::new();
    let mut leftovers: Vec<String> = Vec::new();
    let mut tokens = argv.into_iter().map(Into::<String>::into).peekable();

    while let Some(token) = tokens.next() {
        if token == "--" {
            leftovers.extend(tokens.by_ref());
            break;
        }

        if let Some(body) = token.strip_prefix("--") {
            let (name, inline_value) = match body.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (body, None),
            };
            match resolve_long(&mut cmd, &declared, name)? {
                Some(opt) => {
                    let full = match inline_value {
                        Some(value) => format!("--{}={}", opt.long, value),
                        None => format!("--{}", opt.long),
                    };
                    known.push(full);
                    if opt.takes_value && inline_value.is_none() {
                        if let Some(value) = tokens.next_if(|next| !next.starts_with('-')) {
                            known.push(value);
                        }
                    }
                }
                None => leftovers.push(token),
            }
            continue;
        }

        if help_short.is_some_and(|short| token == format!("-{short}")) {
            known.push(token);
        } else {
            leftovers.push(token);
        }
    }

    Ok((known, leftovers))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::args::{ClusterArgs, LayerArgs};
    use clap::CommandFactory;

    fn split(tokens: &[&str]) -> (Vec<String>, Vec<String>) {
        split_known_args(&ClusterArgs::command(), tokens.iter().copied()).expect("splits")
    }

    fn split_layers(tokens: &[&str]) -> Result<(Vec<String>, Vec<String>), Error> {
        split_known_args(&LayerArgs::command(), tokens.iter().copied())
    }

    #[test]
    fn keeps_declared_flags_and_values() {
        let (known, leftovers) = split(&["--hits", "--datatype", "data", "--posx_posy"]);
        assert_eq!(known, vec!["--hits", "--datatype", "data", "--posx_posy"]);
        assert!(leftovers.is_empty());
    }

    #[test]
    fn inline_value_is_a_single_token() {
        let (known, leftovers) = split(&["--datatype=sim_proton", "extra"]);
        assert_eq!(known, vec!["--datatype=sim_proton"]);
        assert_eq!(leftovers, vec!["extra"]);
    }

    #[test]
    fn unknown_options_and_their_values_are_leftovers() {
        let (known, leftovers) =
            split(&["--unknown-thing", "42", "--hits", "-v", "--datatype", "data"]);
        assert_eq!(known, vec!["--hits", "--datatype", "data"]);
        assert_eq!(leftovers, vec!["--unknown-thing", "42", "-v"]);
    }

    #[test]
    fn value_option_does_not_swallow_a_following_flag() {
        let (known, leftovers) = split(&["--datatype", "--hits"]);
        assert_eq!(known, vec!["--datatype", "--hits"]);
        assert!(leftovers.is_empty());
    }

    #[test]
    fn everything_after_double_dash_is_leftover() {
        let (known, leftovers) = split(&["--all", "--", "--hits", "file.root"]);
        assert_eq!(known, vec!["--all"]);
        assert_eq!(leftovers, vec!["--hits", "file.root"]);
    }

    #[test]
    fn help_is_recognized() {
        let (known, _) = split(&["-h"]);
        assert_eq!(known, vec!["-h"]);
        let (known, _) = split(&["--help"]);
        assert_eq!(known, vec!["--help"]);
    }

    #[test]
    fn unique_prefixes_are_expanded() {
        let (known, leftovers) = split(&["--hit", "--al", "--datat", "data", "--posx_p"]);
        assert_eq!(
            known,
            vec!["--hits", "--all", "--datatype", "data", "--posx_posy"]
        );
        assert!(leftovers.is_empty());
    }

    #[test]
    fn prefix_keeps_inline_value() {
        let (known, _) = split(&["--datat=sim_proton"]);
        assert_eq!(known, vec!["--datatype=sim_proton"]);
    }

    #[test]
    fn exact_name_wins_over_longer_options() {
        let (known, leftovers) = split_layers(&["--densities", "--distances"]).expect("splits");
        assert_eq!(known, vec!["--densities", "--distances"]);
        assert!(leftovers.is_empty());
    }

    #[test]
    fn ambiguous_prefix_is_a_usage_error() {
        let err = split_layers(&["--dens", "--datatype", "data"]).expect_err("ambiguous");
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
        let message = err.to_string();
        assert!(message.contains("--densities_distances"), "{message}");

        assert!(split_known_args(&ClusterArgs::command(), ["--pos"]).is_err());
    }

    #[test]
    fn unmatched_prefix_is_leftover() {
        let (known, leftovers) = split(&["--hitz", "--datatype", "data"]);
        assert_eq!(known, vec!["--datatype", "data"]);
        assert_eq!(leftovers, vec!["--hitz"]);
    }
}
