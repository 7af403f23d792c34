//! Plain-text rendering of guide results.
//!
//! Every function returns the finished text; nothing here prints.

use console::style;
use gift_core::{
    Character, CharacterEffect, CharacterMeta, Effect, Gift, GiftBuckets, GiftEffect, PairEffect,
};

/// Signed value with an explicit `+` for positives: `+5`, `0`, `-3`.
pub fn format_delta(value: i64) -> String {
    if value > 0 {
        format!("+{value}")
    } else {
        value.to_string()
    }
}

pub fn format_effect(effect: Effect) -> String {
    format!(
        "FXP {}  RXP {}",
        format_delta(effect.fxp),
        format_delta(effect.rxp)
    )
}

fn heading(text: &str) -> String {
    style(text).bold().to_string()
}

fn name_with_show(label: &str, show_label: Option<&str>) -> String {
    match show_label {
        Some(show) => format!("{label} · {show}"),
        None => label.to_string(),
    }
}

pub fn pair(pair: &PairEffect<'_>) -> String {
    let breakdown = &pair.breakdown;
    let mut lines = vec![
        heading(&format!("{} → {}", pair.gift.label(), pair.character.label())),
        format!("  {:<28} {}", "base", format_effect(breakdown.base)),
    ];
    for applied in &breakdown.applied {
        let source = format!("{} {}", applied.reason, applied.modifier.target.trim());
        lines.push(format!(
            "  {:<28} {}",
            source,
            format_effect(Effect::delta_of(applied.modifier))
        ));
    }
    lines.push(format!(
        "  {:<28} {}",
        "result",
        format_effect(breakdown.result)
    ));
    lines.join("\n")
}

pub fn gift_table(gift: &Gift, rows: &[CharacterEffect<'_>]) -> String {
    let mut lines = vec![
        heading(&format!(
            "{} (base {})",
            gift.label(),
            format_effect(Effect::base_of(gift))
        )),
        format!("{:<28} {:>6} {:>6} {:>7}", "Character", "FXP", "RXP", "Total"),
    ];
    for row in rows {
        lines.push(format!(
            "{:<28} {:>6} {:>6} {:>7}",
            row.character.label(),
            format_delta(row.effect.fxp),
            format_delta(row.effect.rxp),
            format_delta(row.effect.total())
        ));
    }
    lines.push(format!(
        "Showing {} characters for “{}”. Sorted by total XP (FXP + RXP).",
        rows.len(),
        gift.label()
    ));
    lines.join("\n")
}

pub fn character_table(
    character: &Character,
    show_label: Option<&str>,
    rows: &[GiftEffect<'_>],
) -> String {
    let mut lines = vec![
        heading(&name_with_show(character.label(), show_label)),
        format!(
            "{:<28} {:>8} {:>8} {:>6} {:>6} {:>7}",
            "Gift", "Base FXP", "Base RXP", "FXP", "RXP", "Total"
        ),
    ];
    for row in rows {
        lines.push(format!(
            "{:<28} {:>8} {:>8} {:>6} {:>6} {:>7}",
            row.gift.label(),
            format_delta(row.base.fxp),
            format_delta(row.base.rxp),
            format_delta(row.effect.fxp),
            format_delta(row.effect.rxp),
            format_delta(row.effect.total())
        ));
    }
    lines.push(format!(
        "Showing {} gifts for {}. Sorted by total XP.",
        rows.len(),
        character.label()
    ));
    lines.join("\n")
}

pub fn lab(character: &Character, show_label: Option<&str>, buckets: &GiftBuckets<'_>) -> String {
    let traits: Vec<&str> = character.traits().iter().collect();
    let mut lines = vec![
        heading(&name_with_show(character.label(), show_label)),
        format!("Traits: {}", list_or(&traits, "none listed")),
    ];

    let sections: [(&str, &[GiftEffect<'_>], fn(&Effect) -> i64); 4] = [
        ("FXP boosts", &buckets.fxp_positive, |e| e.fxp),
        ("FXP penalties", &buckets.fxp_negative, |e| e.fxp),
        ("RXP boosts", &buckets.rxp_positive, |e| e.rxp),
        ("RXP penalties", &buckets.rxp_negative, |e| e.rxp),
    ];
    for (title, rows, value) in sections {
        lines.push(String::new());
        lines.push(heading(title));
        if rows.is_empty() {
            lines.push("  (none)".to_string());
        }
        for row in rows {
            lines.push(format!(
                "  {} ({})",
                row.gift.label(),
                format_delta(value(&row.effect))
            ));
        }
    }
    lines.join("\n")
}

pub fn traits(
    character: &Character,
    name: &str,
    show_label: Option<&str>,
    portrait: Option<&str>,
) -> String {
    let mut lines = vec![heading(&name_with_show(name, show_label))];
    lines.push(format!("Command: {}", character.command_name()));
    if let Some(portrait) = portrait {
        lines.push(format!("Portrait: {portrait}"));
    }

    lines.push(String::new());
    lines.push(heading("Physical traits"));
    push_list(&mut lines, character.physical_traits(), "No physical traits listed.");

    lines.push(String::new());
    lines.push(heading("Personality traits"));
    push_list(
        &mut lines,
        character.personality_traits(),
        "No personality traits listed.",
    );
    lines.join("\n")
}

pub fn roster_section(label: &str, entries: &[&CharacterMeta]) -> String {
    let mut lines = vec![heading(&format!("{label} ({})", entries.len()))];
    for meta in entries {
        let mut line = format!(
            "  {:<28} {:<16} {}",
            meta.label(),
            meta.command_name,
            meta.portrait_file()
        );
        if !meta.aka.is_empty() {
            line.push_str(&format!("  aka {}", meta.aka.join(", ")));
        }
        lines.push(line);
    }
    lines.join("\n")
}

pub fn gift_list(gifts: &[&Gift]) -> String {
    let mut lines = vec![format!(
        "{:<28} {:<16} {:>6} {:>6}",
        "Gift", "Key", "FXP", "RXP"
    )];
    for gift in gifts {
        lines.push(format!(
            "{:<28} {:<16} {:>6} {:>6}",
            gift.label(),
            gift.gift_name,
            format_delta(gift.base_fxp),
            format_delta(gift.base_rxp)
        ));
    }
    lines.join("\n")
}

fn list_or(items: &[&str], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

fn push_list(lines: &mut Vec<String>, items: &[String], empty: &str) {
    if items.is_empty() {
        lines.push(format!("  {empty}"));
    }
    lines.extend(items.iter().map(|item| format!("  - {item}")));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_delta() {
        assert_eq!(format_delta(5), "+5");
        assert_eq!(format_delta(0), "0");
        assert_eq!(format_delta(-3), "-3");
        assert_eq!(format_effect(Effect::new(8, -1)), "FXP +8  RXP -1");
    }

    #[test]
    fn test_gift_list_rows() {
        let flowers = Gift::new("flowers", 5, 0).with_display_name("Bouquet");
        let text = gift_list(&[&flowers]);
        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("Bouquet"));
        assert!(row.contains("flowers"));
        assert!(row.trim_end().ends_with("+5      0"));
    }

    #[test]
    fn test_traits_lists_empty_sections() {
        let character = Character::new("egan", "Bucky Egan").with_physical_traits(["Mustache"]);
        let text = traits(&character, "Bucky Egan", Some("Masters of the Air"), None);
        assert!(text.contains("Bucky Egan · Masters of the Air"));
        assert!(text.contains("  - Mustache"));
        assert!(text.contains("No personality traits listed."));
        assert!(!text.contains("Portrait"));
    }

    #[test]
    fn test_roster_section_shows_portrait_file() {
        let colbert = CharacterMeta::new("Brad Colbert", "Sgt. Brad Colbert").with_aka(["Iceman"]);
        let mut egan = CharacterMeta::new("egan", "Bucky Egan");
        egan.image = Some("bucky_egan.webp".to_string());

        let text = roster_section("Band", &[&colbert, &egan]);
        assert!(text.contains("brad_colbert.webp  aka Iceman"));
        assert!(text.contains("bucky_egan.webp"));
    }
}
