//! A section: a page region holding at most two side-by-side columns.

use rayon::prelude::*;

use crate::element::PageElement;
use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::render::DocumentSink;

use super::{Blocks, Column, Settings};

/// Maximum number of side-by-side columns in a section.
pub const MAX_COLUMNS: usize = 2;

/// A page region whose content flows through one or two columns.
///
/// The section routes incoming elements to the column whose region contains
/// them, drives configuration and structural parsing per column, and writes
/// the columns' block streams left-to-right through a single sink.
#[derive(Debug, Clone)]
pub struct Section {
    region: Rect,
    columns: Vec<Column>,
    parallel: bool,
}

impl Section {
    /// Create a section with a single column spanning the whole region.
    pub fn single(region: Rect) -> Self {
        Self {
            region,
            columns: vec![Column::new(region)],
            parallel: true,
        }
    }

    /// Create a section from pre-built columns.
    ///
    /// Columns are ordered left to right by their region. More than
    /// [`MAX_COLUMNS`] columns is an error.
    pub fn with_columns(region: Rect, mut columns: Vec<Column>) -> Result<Self> {
        if columns.len() > MAX_COLUMNS {
            return Err(Error::TooManyColumns(columns.len()));
        }
        columns.sort_by(|a, b| {
            a.region()
                .x0
                .partial_cmp(&b.region().x0)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(Self {
            region,
            columns,
            parallel: true,
        })
    }

    /// Disable parallel stream composition.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// The section's region.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// The section's columns, left to right.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Mutable access to the columns.
    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    /// Route elements to the column containing each element's center.
    ///
    /// Elements outside every column fall back to the first one, so no
    /// content is lost to boundary jitter.
    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = PageElement>) {
        if self.columns.is_empty() {
            return;
        }

        let mut buckets: Vec<Vec<PageElement>> = vec![Vec::new(); self.columns.len()];
        for element in elements {
            let (cx, cy) = element.bbox().center();
            let index = self
                .columns
                .iter()
                .position(|column| column.region().contains_point(cx, cy))
                .unwrap_or(0);
            buckets[index].push(element);
        }

        for (column, bucket) in self.columns.iter_mut().zip(buckets) {
            column.add_elements(bucket);
        }
    }

    /// Configure and structurally parse every column.
    pub fn parse(&mut self, options: &Settings) {
        for column in &mut self.columns {
            column.parse(options);
        }
    }

    /// Build each column's block stream.
    ///
    /// Composition is pure per column, so with more than one column the
    /// streams are built in parallel; a failed column aborts only its own
    /// stream.
    pub fn compose_streams(&self) -> Result<Vec<Blocks>> {
        if self.parallel && self.columns.len() > 1 {
            self.columns
                .par_iter()
                .map(|column| column.compose_stream())
                .collect()
        } else {
            self.columns
                .iter()
                .map(|column| column.compose_stream())
                .collect()
        }
    }

    /// Render all columns into a document sink, left to right.
    ///
    /// Writing is always sequential; only stream composition runs in
    /// parallel.
    pub fn render(&self, sink: &mut dyn DocumentSink) -> Result<()> {
        let streams = self.compose_streams()?;
        for stream in &streams {
            stream.write_to(sink)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::TextLine;

    fn two_column_section() -> Section {
        let region = Rect::new(0.0, 0.0, 200.0, 100.0);
        Section::with_columns(
            region,
            vec![
                Column::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
                Column::new(Rect::new(100.0, 0.0, 200.0, 100.0)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_too_many_columns() {
        let region = Rect::new(0.0, 0.0, 300.0, 100.0);
        let columns = vec![
            Column::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            Column::new(Rect::new(100.0, 0.0, 200.0, 100.0)),
            Column::new(Rect::new(200.0, 0.0, 300.0, 100.0)),
        ];
        let err = Section::with_columns(region, columns).unwrap_err();
        assert!(matches!(err, Error::TooManyColumns(3)));
    }

    #[test]
    fn test_columns_sorted_left_to_right() {
        let region = Rect::new(0.0, 0.0, 200.0, 100.0);
        let section = Section::with_columns(
            region,
            vec![
                Column::new(Rect::new(100.0, 0.0, 200.0, 100.0)),
                Column::new(Rect::new(0.0, 0.0, 100.0, 100.0)),
            ],
        )
        .unwrap();
        assert_eq!(section.columns()[0].region().x0, 0.0);
        assert_eq!(section.columns()[1].region().x0, 100.0);
    }

    #[test]
    fn test_routing_by_center() {
        let mut section = two_column_section();
        section.add_elements([
            PageElement::Line(TextLine::new("left", Rect::new(10.0, 10.0, 90.0, 20.0))),
            PageElement::Line(TextLine::new("right", Rect::new(110.0, 10.0, 190.0, 20.0))),
        ]);

        assert_eq!(section.columns()[0].lines().len(), 1);
        assert_eq!(section.columns()[0].lines()[0].text, "left");
        assert_eq!(section.columns()[1].lines().len(), 1);
        assert_eq!(section.columns()[1].lines()[0].text, "right");
    }

    #[test]
    fn test_routing_fallback_to_first_column() {
        let mut section = two_column_section();
        section.add_elements([PageElement::Line(TextLine::new(
            "stray",
            Rect::new(-50.0, -50.0, -10.0, -40.0),
        ))]);
        assert_eq!(section.columns()[0].lines().len(), 1);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut section = two_column_section();
        section.add_elements([
            PageElement::Line(TextLine::new("left", Rect::new(10.0, 10.0, 90.0, 20.0))),
            PageElement::Line(TextLine::new("right", Rect::new(110.0, 10.0, 190.0, 20.0))),
        ]);
        section.parse(&Settings::recommended());

        let parallel = section.compose_streams().unwrap();
        let sequential = section.clone().sequential().compose_streams().unwrap();
        assert_eq!(parallel, sequential);
    }
}
