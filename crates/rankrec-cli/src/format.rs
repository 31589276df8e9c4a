/// Output rendering: human-readable text and JSON.
///
/// Every renderer writes to a caller-supplied [`Write`] so commands can target
/// the locked stdout while tests target a `Vec<u8>`.
///
/// - **Human mode**: one cluster per line, numbered from 1, members joined by
///   `", "`. Warnings go to stderr prefixed with `warning:`.
/// - **JSON mode**: pretty-printed JSON followed by a newline. Warnings are
///   part of the payload instead of stderr.
use std::io::{self, Write};

use rankrec_core::{ElementPair, PairReport, Ranking, ReconcileOutput, ReconcileWarning};
use serde::Serialize;

// ---------------------------------------------------------------------------
// JSON
// ---------------------------------------------------------------------------

/// Writes `value` as pretty-printed JSON plus a trailing newline.
pub fn write_json<W: Write, T: Serialize + ?Sized>(w: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *w, value)?;
    w.write_all(b"\n")
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes a ranking as numbered cluster lines.
///
/// ```text
///   1  a, b
///   2  c
/// ```
pub fn write_ranking<W: Write>(w: &mut W, ranking: &Ranking) -> io::Result<()> {
    if ranking.is_empty() {
        return writeln!(w, "  (empty)");
    }
    let width = ranking.len().to_string().len();
    for (i, cluster) in ranking.clusters().iter().enumerate() {
        writeln!(w, "  {:>width$}  {}", i + 1, cluster.join(", "))?;
    }
    Ok(())
}

/// Writes contradicting pairs one per line as `a / b`.
pub fn write_contradictions<W: Write>(w: &mut W, pairs: &[ElementPair]) -> io::Result<()> {
    for pair in pairs {
        writeln!(w, "  {pair}")?;
    }
    Ok(())
}

/// Writes the full reconciliation report.
pub fn write_reconcile<W: Write>(w: &mut W, output: &ReconcileOutput) -> io::Result<()> {
    writeln!(w, "contradictions: {}", output.contradictions.len())?;
    write_contradictions(w, &output.contradictions)?;
    writeln!(
        w,
        "consistent ranking: {} cluster(s)",
        output.consistent_ranking.len()
    )?;
    write_ranking(w, &output.consistent_ranking)
}

/// Writes a [`PairReport`] as aligned `label: relation` lines.
pub fn write_pair_report<W: Write>(w: &mut W, report: &PairReport) -> io::Result<()> {
    let (a, b) = (&report.a, &report.b);
    writeln!(w, "first:         {a} {} {b}", report.first)?;
    writeln!(w, "second:        {a} {} {b}", report.second)?;
    writeln!(w, "merged:        {a} {} {b}", report.merged)?;
    let verdict = if report.contradiction { "yes" } else { "no" };
    writeln!(w, "contradiction: {verdict}")
}

/// Writes each warning on its own `warning:` line.
pub fn write_warnings<W: Write>(w: &mut W, warnings: &[ReconcileWarning]) -> io::Result<()> {
    for warning in warnings {
        writeln!(w, "warning: {warning}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
