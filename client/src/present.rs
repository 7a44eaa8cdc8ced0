//! Terminal rendering of a [`BattleReport`]

use std::fmt;

use counterdex_battle::{BattleReport, SpeciesInfo, Type, capitalize};

/// How many recommended moves the text layout shows
pub const MOVES_SHOWN: usize = 10;

/// Plain-text layout of a report
pub struct TextReport<'a>(pub &'a BattleReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;

        writeln!(f, "{}", capitalize(&report.enemy_name))?;
        if let Some(sprite) = &report.enemy_sprite {
            writeln!(f, "  Sprite: {}", sprite)?;
        }
        writeln!(f, "  Types: {}", type_labels(&report.enemy_types))?;
        writeln!(f, "  Counter types: {}", type_labels(&report.effective_types))?;
        writeln!(
            f,
            "  Recommended moves: {}",
            report.top_moves(MOVES_SHOWN).join(", ")
        )?;

        writeln!(f)?;
        writeln!(f, "Recommended Pokémon:")?;
        if report.recommended_species.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for species in &report.recommended_species {
            write_species(f, species)?;
        }

        Ok(())
    }
}

fn write_species(f: &mut fmt::Formatter<'_>, species: &SpeciesInfo) -> fmt::Result {
    writeln!(f, "  {}", species.display_name())?;
    if let Some(sprite) = &species.sprite_url {
        writeln!(f, "    Sprite: {}", sprite)?;
    }
    writeln!(f, "    Types: {}", type_labels(&species.types))?;
    writeln!(f, "    Stats: {}", species.stats)
}

fn type_labels(types: &[Type]) -> String {
    types.iter().map(Type::label).collect::<Vec<_>>().join(", ")
}

/// Text layout as a string
pub fn render_text(report: &BattleReport) -> String {
    TextReport(report).to_string()
}

/// The report payload as pretty-printed JSON
pub fn render_json(report: &BattleReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}
