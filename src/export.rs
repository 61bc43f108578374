use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use printpdf::{BuiltinFont, Mm, PdfDocument};
use thiserror::Error;

pub const EXPORT_FILENAME: &str = "flip-deal-analysis.pdf";

const PAGE_TITLE: &str = "Flip Deal Analysis Summary";

/// Errors from writing the PDF summary.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Could not create or write the output file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// PDF assembly or save failed.
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// Write the summary lines to a single A4 page at `path`.
///
/// Coordinates are top-left-origin millimetres (title at (10, 10), lines
/// stepping down 10 mm each), converted to PDF's bottom-left origin.
pub fn export_summary(lines: &[String], path: &Path) -> Result<(), ExportError> {
    let (doc, page, layer) = PdfDocument::new("Flip Deal Analysis", Mm(210.0), Mm(297.0), "Summary");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let layer = doc.get_page(page).get_layer(layer);

    let mut y = 10.0;
    layer.use_text(PAGE_TITLE, 16.0, Mm(10.0), Mm(297.0 - y), &font);

    for line in lines {
        y += 10.0;
        layer.use_text(line.as_str(), 12.0, Mm(10.0), Mm(297.0 - y), &font);
    }

    doc.save(&mut BufWriter::new(File::create(path)?))
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::evaluate;
    use crate::model::DealInputs;
    use crate::summary::render_lines;
    use tempfile::tempdir;

    #[test]
    fn writes_a_pdf_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(EXPORT_FILENAME);

        let inputs = DealInputs {
            purchase_price: 100_000.0,
            reno_costs: 20_000.0,
            resale_price: 150_000.0,
            ..DealInputs::default()
        };
        let lines = render_lines(&evaluate(&inputs));

        export_summary(&lines, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn unwritable_path_reports_io_error() {
        let lines = vec!["Total Investment: $0".to_string()];
        let err = export_summary(&lines, Path::new("/no/such/dir/out.pdf")).unwrap_err();
        assert!(matches!(err, ExportError::Io(_)));
    }
}
