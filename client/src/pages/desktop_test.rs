use super::*;

#[test]
fn banner_puts_version_line_under_logo() {
    let text = banner_text();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with(" ██╗   ██╗"));
    assert!(lines[5].trim_start().starts_with("╚═════╝"));
    assert!(lines[6].is_empty());
    assert_eq!(lines[7].trim(), VERSION_LINE);
}
