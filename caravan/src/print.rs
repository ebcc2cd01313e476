use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Col, Row, Table};

use crate::probs::LegProbs;

/// Tabulates the placing probabilities of one or more analyses side by side, one row per
/// marker. Rows follow the roster of the first analysis; markers missing from a later analysis
/// are shown as `-`.
pub fn tabulate(analyses: &[(&str, &LegProbs)]) -> Table {
    let mut table = Table::default()
        .with_cols({
            let mut cols = vec![Col::new(
                Styles::default().with(MinWidth(8)).with(HAlign::Centred),
            )];
            for _ in analyses {
                cols.push(Col::new(
                    Styles::default()
                        .with(Separator(true))
                        .with(MinWidth(10))
                        .with(HAlign::Right),
                ));
                cols.push(Col::new(
                    Styles::default().with(MinWidth(10)).with(HAlign::Right),
                ));
            }
            cols
        })
        .with_row({
            let mut header_cells = vec!["".into()];
            for (label, _) in analyses {
                header_cells.push((*label).into());
                header_cells.push("".into());
            }
            Row::new(
                Styles::default().with(Header(true)).with(Separator(true)),
                header_cells,
            )
        })
        .with_row({
            let mut header_cells = vec!["Marker".into()];
            for _ in analyses {
                header_cells.push("1st".into());
                header_cells.push("2nd".into());
            }
            Row::new(Styles::default().with(Header(true)), header_cells)
        });

    if let Some((_, reference)) = analyses.first() {
        for marker in reference.roster().markers() {
            let mut row_cells = vec![marker.to_string().into()];
            for (_, probs) in analyses {
                match probs.get(marker) {
                    None => {
                        row_cells.push("-".into());
                        row_cells.push("-".into());
                    }
                    Some(placings) => {
                        row_cells.push(format!("{:.6}", placings.first).into());
                        row_cells.push(format!("{:.6}", placings.second).into());
                    }
                }
            }
            table.push_row(Row::new(Styles::default(), row_cells));
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::Pyramid;
    use crate::enumeration::analyse_exhaustive;
    use crate::testing::track_of;
    use stanza::renderer::console::Console;
    use stanza::renderer::Renderer;
    use std::str::FromStr;

    #[test]
    fn renders_each_marker() {
        let track = track_of(&["r", "", "", "b"]);
        let probs = analyse_exhaustive(&track, &Pyramid::from_str("r").unwrap()).unwrap();
        let table = tabulate(&[("Exhaustive", &probs), ("Again", &probs)]);
        let rendered = format!("{}", Console::default().render(&table));
        assert!(rendered.contains("Exhaustive"), "{rendered}");
        assert!(rendered.contains("Marker"), "{rendered}");
        assert!(rendered.contains("0.333333"), "{rendered}");
        assert!(rendered.contains("0.666667"), "{rendered}");
    }

    #[test]
    fn renders_a_single_analysis() {
        let track = track_of(&["rb", "", "g"]);
        let probs = analyse_exhaustive(&track, &Pyramid::default()).unwrap();
        let table = tabulate(&[("Monte Carlo", &probs)]);
        let rendered = format!("{}", Console::default().render(&table));
        assert!(rendered.contains("Monte Carlo"), "{rendered}");
        assert!(!rendered.contains("Exhaustive"), "{rendered}");
        assert!(rendered.contains("1.000000"), "{rendered}");
    }
}
