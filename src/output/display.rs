//! Display functions for command results

use super::formatters::{
    colored_segmentation, create_progress_bar, format_latency, hint_dot, paint, slot_mark,
};
use crate::commands::{AnalyzeResult, ReadResult, SegmentResult, TrayView};
use crate::core::Role;
use crate::game::{PracticeEntry, ScoreEvent, SessionSummary, Trial};
use crate::reader::Click;
use colored::Colorize;

fn heading(title: &str, subject: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        subject.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

/// Print the stages of a segmentation lookup
pub fn print_segment_result(result: &SegmentResult, verbose: bool) {
    heading("SEGMENT:", &result.word);

    println!("\n   {}", colored_segmentation(&result.merged));

    if verbose {
        println!("\n   Heuristic: {}", colored_segmentation(&result.heuristic));
        if let Some(aligned) = &result.aligned {
            println!("   Service:   {}", colored_segmentation(aligned));
        }
    }

    for fragment in &result.merged {
        if let Some(meaning) = fragment.meaning() {
            println!(
                "   {:<8} {} = {}",
                fragment.role().label(),
                paint(fragment.text(), fragment.role()),
                meaning
            );
        }
    }

    if let Some(error) = &result.error {
        log::debug!("segment {}: {error}", result.word);
        println!(
            "\n{}",
            "⚠ Service unavailable, showing the heuristic split".yellow()
        );
    }
}

/// Print a service analysis
pub fn print_analyze_result(result: &AnalyzeResult) {
    heading(
        &format!("{}:", result.analysis_type.as_str().to_uppercase()),
        &result.word,
    );

    if let Some(fragments) = &result.fragments {
        println!("\n   {}", colored_segmentation(fragments));
        for fragment in fragments {
            println!(
                "   {:<8} {:<12} {}",
                fragment.role().label(),
                fragment.text(),
                fragment.meaning().unwrap_or("").bright_black()
            );
        }
    }

    let details = &result.details;
    if let Some(meaning) = &details.meaning {
        println!("\n📖 {} {meaning}", "Meaning:".bright_cyan().bold());
    }
    if let Some(origin) = &details.historical_origin {
        println!("\n🏛  {} {origin}", "Origin:".bright_cyan().bold());
    }
    if let Some(etymology) = &details.etymology {
        println!("\n🌱 {} {etymology}", "Etymology:".bright_cyan().bold());
    }
    if !details.morphological_relatives.is_empty() {
        println!(
            "\n🔗 {} {}",
            "Morphological relatives:".bright_cyan().bold(),
            details.morphological_relatives.join(", ")
        );
    }
    if !details.etymological_relatives.is_empty() {
        println!(
            "\n🔗 {} {}",
            "Etymological relatives:".bright_cyan().bold(),
            details.etymological_relatives.join(", ")
        );
    }
    if let Some(graphemes) = &details.graphemes {
        println!("\n🔤 {} {graphemes}", "Graphemes:".bright_cyan().bold());
    }

    if result.fragments.is_none() && details.is_empty() {
        println!("\n{}", result.raw);
    }
}

/// Print the passage with clicked words segmented
pub fn print_read_result(result: &ReadResult) {
    println!("\n{}", "─".repeat(60).cyan());
    let passage: Vec<String> = result
        .tokens
        .iter()
        .enumerate()
        .map(|(i, t)| {
            if t.is_word() {
                format!("{}{}", t.raw, format!("[{i}]").bright_black())
            } else {
                t.raw.clone()
            }
        })
        .collect();
    println!("{}", passage.join(" "));
    println!("{}", "─".repeat(60).cyan());

    for lookup in &result.lookups {
        let source = match lookup.click {
            Click::Cached => " (cached)".bright_black().to_string(),
            Click::AlreadyPending => " (pending)".bright_black().to_string(),
            Click::Requested { .. } | Click::Ignored => String::new(),
        };
        println!(
            "  [{:>3}] {:<16} {}{source}",
            lookup.index,
            lookup.word,
            colored_segmentation(&lookup.fragments)
        );
        if let Some(error) = &lookup.error {
            log::debug!("lookup {}: {error}", lookup.word);
            println!("        {}", error.user_message().yellow());
        }
        if let Some(meaning) = lookup.details.as_ref().and_then(|d| d.meaning.as_deref()) {
            println!("        {}", meaning.bright_black());
        }
    }

    if !result.added_to_tray.is_empty() {
        println!(
            "\n📥 Added to tray: {}",
            result.added_to_tray.join(", ").green()
        );
    }
}

/// Print the tray with selection marks
pub fn print_tray(view: &TrayView) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Tray: {} word(s), {} shown, {} selected",
        view.total,
        view.rows.len(),
        view.chosen.len()
    );
    println!("{}", "─".repeat(60).cyan());

    if view.rows.is_empty() {
        println!("  (empty, read a passage to collect words)");
        return;
    }
    for row in &view.rows {
        let mark = if row.selected {
            "[x]".green().bold()
        } else {
            "[ ]".normal()
        };
        println!("  {mark} {}", row.word);
    }
    if view.all_visible_selected {
        println!("\n  All shown words are selected.");
    }
}

/// Print the current trial: progress, slots and the tile bank
pub fn print_trial(trial: &Trial, index: usize, total: usize, score: usize, hint_dots: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Word {}/{}  [{}]  Score: {}",
        index + 1,
        total,
        create_progress_bar(index as f64, total as f64, 20).green(),
        score.to_string().bright_yellow().bold()
    );
    println!(
        "\n  {}",
        trial.word().to_uppercase().bright_white().bold()
    );

    println!();
    for role in Role::ALL {
        let content = trial
            .placed(role)
            .map_or_else(|| "____".bright_black().to_string(), |t| paint(t.text(), role).to_string());
        let optional = if *trial.required().get(role) {
            ""
        } else {
            " (optional)"
        };
        println!("  {:<7} {content}{}", role.label(), optional.bright_black());
    }

    println!("\n  Tiles:");
    let bank: Vec<String> = trial
        .bank()
        .enumerate()
        .map(|(i, tile)| {
            if hint_dots {
                format!("{}) {}{}", i + 1, tile.text(), hint_dot(tile.fragment.role()))
            } else {
                format!("{}) {}", i + 1, tile.text())
            }
        })
        .collect();
    if bank.is_empty() {
        println!("    (all tiles placed)");
    } else {
        println!("    {}", bank.join("   "));
    }

    if trial.is_complete() {
        println!("\n  Ready to check (c).");
    }
    println!();
}

/// Print per-slot results, gold meanings and the word family
pub fn print_feedback(event: &ScoreEvent, entry: &PracticeEntry) {
    println!();
    if event.correct {
        println!("{}", "✅ Correct!".green().bold());
    } else {
        println!("{}", "❌ Not quite.".red().bold());
    }

    for role in Role::ALL {
        let Some(gold) = event.gold.get(role) else {
            continue;
        };
        let placed = event.placed.get(role).as_deref().unwrap_or("—");
        let ok = *event.per_slot.get(role);
        let mark = if ok {
            slot_mark(ok).green()
        } else {
            slot_mark(ok).red()
        };
        let meaning = entry
            .morphemes
            .iter()
            .find(|f| f.role() == role)
            .and_then(|f| f.meaning())
            .map(|m| format!(" = {m}"))
            .unwrap_or_default();
        println!(
            "  {mark} {:<7} {:<10} {}{}",
            role.label(),
            placed,
            paint(gold, role),
            meaning.bright_black()
        );
    }

    println!(
        "\n  {} {}{}",
        colored_segmentation(&entry.morphemes),
        format_latency(event.latency_ms).bright_black(),
        if event.hint_used { "  (hint used)" } else { "" }
    );
    if !entry.families.is_empty() {
        println!("  Word family: {}", entry.families.join(", ").cyan());
    }
    println!();
}

/// Print end-of-session statistics
pub fn print_summary(summary: &SessionSummary) {
    heading("SESSION COMPLETE", "");
    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Items:        {}", summary.items);
    println!(
        "   Correct:      {}",
        summary.correct.to_string().green().bold()
    );
    println!(
        "   Accuracy:     [{}] {}",
        create_progress_bar(f64::from(summary.accuracy_pct), 100.0, 30).green(),
        format!("{}%", summary.accuracy_pct).bright_yellow()
    );
    println!(
        "   Avg latency:  {}",
        format_latency(summary.avg_latency_ms)
    );
    println!();
}
