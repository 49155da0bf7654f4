//! Integration tests for sections and the bundled sinks.

use std::fs;
use std::io::Write;

use reflow::{
    to_json, Color, Column, CountingSink, JsonFormat, PageElement, Rect, Section, Settings, Shape,
    TextLine, TextSink,
};

fn line(text: &str, x0: f32, y0: f32, x1: f32, y1: f32) -> PageElement {
    PageElement::Line(TextLine::new(text, Rect::new(x0, y0, x1, y1)))
}

fn two_column_section() -> Section {
    Section::with_columns(
        Rect::new(0.0, 0.0, 200.0, 100.0),
        vec![
            Column::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            Column::new(Rect::new(100.0, 0.0, 200.0, 100.0)),
        ],
    )
    .unwrap()
}

#[test]
fn two_column_render_counts_all_blocks() {
    let mut section = two_column_section();
    section.add_elements([
        line("left text", 10.0, 10.0, 90.0, 20.0),
        line("right text", 110.0, 10.0, 190.0, 20.0),
        PageElement::Graphic(Shape::fill(
            Rect::new(110.0, 40.0, 190.0, 45.0),
            Color::new(1.0, 0.0, 0.0),
        )),
        // White background fill: discarded during approximation.
        PageElement::Graphic(Shape::fill(Rect::new(0.0, 0.0, 100.0, 100.0), Color::WHITE)),
    ]);
    section.parse(&Settings::recommended());

    let mut sink = CountingSink::new();
    section.render(&mut sink).unwrap();

    assert_eq!(sink.paragraphs, 2);
    assert_eq!(sink.tables, 1);
}

#[test]
fn section_single_spans_region() {
    let section = Section::single(Rect::new(0.0, 0.0, 612.0, 792.0));
    assert_eq!(section.columns().len(), 1);
    assert_eq!(section.columns()[0].region(), section.region());
}

#[test]
fn sequential_render_matches_parallel() {
    let build = || {
        let mut section = two_column_section();
        section.add_elements([
            line("left", 10.0, 10.0, 90.0, 20.0),
            line("right", 110.0, 10.0, 190.0, 20.0),
        ]);
        section.parse(&Settings::recommended());
        section
    };

    let mut parallel_sink = CountingSink::new();
    build().render(&mut parallel_sink).unwrap();

    let mut sequential_sink = CountingSink::new();
    build().sequential().render(&mut sequential_sink).unwrap();

    assert_eq!(parallel_sink.total(), sequential_sink.total());
}

#[test]
fn text_sink_writes_to_file() {
    let mut section = Section::single(Rect::new(0.0, 0.0, 200.0, 100.0));
    section.add_elements([
        line("First paragraph.", 10.0, 10.0, 190.0, 20.0),
        line("Second paragraph.", 10.0, 50.0, 190.0, 60.0),
    ]);
    section.parse(&Settings::recommended());

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("output.txt");
    {
        let file = fs::File::create(&path).unwrap();
        let mut sink = TextSink::new(file);
        section.render(&mut sink).unwrap();
        sink.into_inner().flush().unwrap();
    }

    let output = fs::read_to_string(&path).unwrap();
    assert!(output.contains("First paragraph."));
    assert!(output.contains("Second paragraph."));
}

#[test]
fn composed_stream_serializes_to_json() {
    let blocks = reflow::compose(
        Rect::new(0.0, 0.0, 100.0, 200.0),
        [
            line("hello", 10.0, 10.0, 90.0, 20.0),
            PageElement::Graphic(Shape::stroke(
                Rect::new(10.0, 40.0, 90.0, 41.0),
                Color::gray(0.25),
            )),
        ],
        &Settings::recommended(),
    )
    .unwrap();

    let json = to_json(&blocks, JsonFormat::Compact).unwrap();
    assert!(json.contains("\"type\":\"text\""));
    assert!(json.contains("\"type\":\"table\""));
}
