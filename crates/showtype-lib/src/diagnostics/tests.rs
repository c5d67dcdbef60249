use super::*;

fn trace(span: Span, message: &str) -> DiagnosticMessage {
    DiagnosticMessage::new(DiagnosticKind::Trace, span, message)
}

#[test]
fn severity_display() {
    insta::assert_snapshot!(format!("{}", Severity::Warning), @"warning");
    insta::assert_snapshot!(format!("{}", Severity::Info), @"info");
}

#[test]
fn kind_severity_defaults() {
    assert_eq!(DiagnosticKind::Trace.default_severity(), Severity::Info);
    assert_eq!(DiagnosticKind::IgnoredMarker.default_severity(), Severity::Warning);
}

#[test]
fn span_display_and_emptiness() {
    assert_eq!(Span::new(3, 7).to_string(), "3..7");
    assert!(Span::new(4, 4).is_empty());
    assert!(!Span::new(4, 5).is_empty());
}

#[test]
fn block_message_display() {
    let diag = trace(Span::new(0, 4), "\nlist<TValue: int>\n");
    assert!(diag.is_block());
    assert_eq!(diag.body(), "list<TValue: int>");
    insta::assert_snapshot!(diag.to_string(), @r"
    info[Trace] at 0..4:
    list<TValue: int>
    ");
}

#[test]
fn inline_message_display() {
    let diag = trace(Span::new(2, 9), "Unable to determine type");
    assert!(!diag.is_block());
    insta::assert_snapshot!(diag.to_string(), @"info[Trace] at 2..9: Unable to determine type");
}

#[test]
fn collection_counts_warnings() {
    let mut diagnostics = Diagnostics::new();
    assert!(diagnostics.is_empty());

    diagnostics.push(trace(Span::new(0, 1), "int"));
    diagnostics.push(DiagnosticMessage::new(
        DiagnosticKind::IgnoredMarker,
        Span::new(1, 2),
        "ignored",
    ));
    diagnostics.push(trace(Span::new(2, 3), "string"));

    assert_eq!(diagnostics.len(), 3);
    assert_eq!(diagnostics.warning_count(), 1);
    let kinds: Vec<DiagnosticKind> = diagnostics.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        [
            DiagnosticKind::Trace,
            DiagnosticKind::IgnoredMarker,
            DiagnosticKind::Trace
        ]
    );

    let messages: Vec<String> = diagnostics.into_iter().map(|d| d.message).collect();
    assert_eq!(messages, vec!["int", "ignored", "string"]);
}

#[test]
fn plain_printer_joins_entries() {
    let diagnostics: Diagnostics = [
        trace(Span::new(0, 3), "\nint | null\n"),
        trace(Span::new(5, 8), "Unable to determine type"),
    ]
    .into_iter()
    .collect();

    insta::assert_snapshot!(diagnostics.printer().render(), @r"
    info[Trace] at 0..3:
    int | null
    info[Trace] at 5..8: Unable to determine type
    ");
}

#[test]
fn plain_printer_empty() {
    assert_eq!(Diagnostics::new().printer().render(), "");
}

#[test]
fn snippet_printer_shows_source_and_path() {
    let source = "$items = load();\nreturn $items;\n";
    let diagnostics: Diagnostics = [trace(Span::new(0, 6), "\nlist<TValue: Item>\n")]
        .into_iter()
        .collect();

    let out = diagnostics
        .printer()
        .source(source)
        .path("src/app.php")
        .render();

    assert!(out.contains("info: Trace"));
    assert!(out.contains("list<TValue: Item>"));
    assert!(out.contains("src/app.php"));
    assert!(out.contains("$items = load();"));
    assert!(out.contains("type shown for this node"));
}

#[test]
fn snippet_printer_uses_warning_level() {
    let source = "echo $x;";
    let diagnostics: Diagnostics = [DiagnosticMessage::new(
        DiagnosticKind::IgnoredMarker,
        Span::new(0, 4),
        "marker ignored",
    )]
    .into_iter()
    .collect();

    let out = diagnostics.printer().source(source).render();
    assert!(out.starts_with("warning: IgnoredMarker: marker ignored"));
    assert!(out.contains("not an assignment or return"));
}

#[test]
fn snippet_printer_clamps_spans() {
    let source = "short";
    let diagnostics: Diagnostics = [
        trace(Span::new(2, 400), "int"),
        trace(Span::new(900, 900), "int"),
        trace(Span::new(1, 1), "int"),
    ]
    .into_iter()
    .collect();

    let out = diagnostics.printer().source(source).render();
    assert_eq!(out.matches("info: Trace: int").count(), 3);
}

#[test]
fn snippet_printer_snaps_spans_to_char_boundaries() {
    let source = "é = 1;\n$ü = 'ß';";
    let diagnostics: Diagnostics = [
        // inside `é`
        trace(Span::new(1, 2), "\nint\n"),
        // empty span inside `é`
        trace(Span::new(1, 1), "int"),
        // starts inside `ü`, ends inside `ß`
        trace(Span::new(10, 16), "string"),
        // starts inside `ß`, ends past the source
        trace(Span::new(16, 99), "string"),
    ]
    .into_iter()
    .collect();

    let out = diagnostics.printer().source(source).render();
    assert_eq!(out.matches("info: Trace").count(), 4);
    assert!(out.contains("é = 1;"));
    assert!(out.contains("$ü = 'ß';"));
}

#[test]
fn snippet_printer_handles_empty_span_at_end_of_multibyte_source() {
    let source = "ß";
    let diagnostics: Diagnostics = [trace(Span::new(2, 2), "int"), trace(Span::new(0, 0), "int")]
        .into_iter()
        .collect();

    let out = diagnostics.printer().source(source).render();
    assert_eq!(out.matches("info: Trace: int").count(), 2);
}
