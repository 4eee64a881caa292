pub fn format_flag(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}

pub fn format_leftovers(leftovers: &[String]) -> String {
    if leftovers.is_empty() {
        "-".to_string()
    } else {
        leftovers.join(" ")
    }
}
