//! Plain-text layout summary for the terminal.

use benchkit_designer::BlastLayout;
use std::fmt;

/// Displays a computed layout as a short report with one row per hole.
pub struct Summary<'a>(pub &'a BlastLayout);

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let layout = self.0;
        let p = &layout.params;

        writeln!(
            f,
            "Bench: height {:.2} m, slope {:.1}°, base {:.2} m, toe at x = {:.2} m",
            p.bench_height, p.slope_angle_deg, p.base_offset, layout.bench.toe.x
        )?;
        writeln!(
            f,
            "Holes: {} of {} candidates (burden {:.2} m, crest adjust {:.2} m)",
            layout.hole_count(),
            layout.hole_layout.candidate_count,
            p.burden,
            p.crest_adjust
        )?;

        if !layout.holes.is_empty() {
            writeln!(
                f,
                "{:>4} {:>8} {:>8} {:>8} {:>8} {:>9}",
                "#", "x", "length", "charge", "water", "stemming"
            )?;
            for hole in &layout.holes {
                let h = &hole.params;
                writeln!(
                    f,
                    "{:>4} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>9.2}",
                    hole.number(),
                    hole.x,
                    h.length,
                    h.charge_length,
                    h.water_length,
                    hole.stemming_length()
                )?;
            }
        }

        writeln!(f, "Dimensions: {}", layout.dimensions.len())?;
        write!(f, "View: {}", layout.view)?;

        for issue in &layout.issues {
            write!(f, "\nwarning: {}", issue)?;
        }
        Ok(())
    }
}
