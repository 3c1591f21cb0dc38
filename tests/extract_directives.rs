use cellrun::directive::{Directive, MARKER, extract};

#[test]
fn returns_marker_lines_in_source_order() {
    let source = "\
int main(void) {
//% cc -c main.c
    return 0;
//%   ./a.out --flag
}
//%echo done
";

    let commands: Vec<_> = extract(source).map(|d| d.command().to_string()).collect();
    assert_eq!(commands, vec!["cc -c main.c", "./a.out --flag", "echo done"]);
}

#[test]
fn lines_without_the_marker_contribute_nothing() {
    let source = "plain code\n// comment\n %// not a marker\n";
    assert_eq!(extract(source).count(), 0);
}

#[test]
fn indented_marker_is_not_a_directive() {
    let source = "  //% echo indented\n\t//% echo tabbed\n//% echo real\n";
    let commands: Vec<_> = extract(source).collect();
    assert_eq!(commands, vec![Directive::new("echo real")]);
}

#[test]
fn marker_only_line_yields_an_empty_command() {
    let commands: Vec<_> = extract("//%\n//%   \n").collect();
    assert_eq!(commands, vec![Directive::new(""), Directive::new("")]);
}

#[test]
fn empty_source_yields_an_empty_sequence() {
    assert_eq!(extract("").count(), 0);
}

#[test]
fn extraction_is_restartable() {
    let source = "//% echo one\ncode\n//% echo two\n";

    let first: Vec<_> = extract(source).collect();
    let second: Vec<_> = extract(source).collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn marker_is_three_characters() {
    // The extractor strips exactly this prefix; a change here would silently
    // change what counts as a directive.
    assert_eq!(MARKER.len(), 3);
    assert_eq!(MARKER, "//%");
}
