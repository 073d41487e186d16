//! Equations and controls sidebar
//!
//! Displays the model's update rule and key bindings using egui.

use egui::{Context, RichText, Color32};
use solar_system::controls::BINDINGS;

/// An equation with its name and formula
pub struct Equation {
    pub name: &'static str,
    pub formula: &'static str,
    pub description: &'static str,
}

/// Draw the equations sidebar
pub fn draw_equations_sidebar(
    ctx: &Context,
    title: &str,
    equations: &[Equation],
    variables: &[(&str, &str)],
) {
    egui::SidePanel::right("equations_panel")
        .resizable(true)
        .default_width(280.0)
        .show(ctx, |ui| {
            ui.heading(RichText::new(title).color(Color32::LIGHT_BLUE));
            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.collapsing(RichText::new("📐 Equations").strong(), |ui| {
                    for eq in equations {
                        ui.group(|ui| {
                            ui.label(RichText::new(eq.name).strong().color(Color32::YELLOW));
                            ui.label(RichText::new(eq.formula).monospace().color(Color32::WHITE));
                            ui.label(RichText::new(eq.description).small().italics());
                        });
                        ui.add_space(4.0);
                    }
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("📖 Variables").strong(), |ui| {
                    egui::Grid::new("variables_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (symbol, meaning) in variables {
                                ui.label(RichText::new(*symbol).monospace().color(Color32::LIGHT_GREEN));
                                ui.label(*meaning);
                                ui.end_row();
                            }
                        });
                });

                ui.add_space(8.0);

                ui.collapsing(RichText::new("⌨ Controls").strong(), |ui| {
                    egui::Grid::new("controls_grid")
                        .num_columns(2)
                        .spacing([10.0, 4.0])
                        .show(ui, |ui| {
                            for (key, command) in BINDINGS {
                                ui.label(RichText::new(*key).monospace().color(Color32::LIGHT_GREEN));
                                ui.label(command.label());
                                ui.end_row();
                            }
                        });
                });
            });
        });
}

// ============================================================================
// Model Equations
// ============================================================================

pub const SOLAR_SYSTEM_EQUATIONS: &[Equation] = &[
    Equation {
        name: "Pairwise Force",
        formula: "F = G·m₁·m₂ / r²",
        description: "Pull of one body on another",
    },
    Equation {
        name: "Velocity Delta",
        formula: "Δv = r̂·F·Δt",
        description: "Added once per partner, per frame",
    },
    Equation {
        name: "Position Update",
        formula: "x += v / m",
        description: "Applied right after each velocity delta",
    },
];

pub const SOLAR_SYSTEM_VARIABLES: &[(&str, &str)] = &[
    ("G", "Gravitational constant (6.6743)"),
    ("m₁, m₂", "Mass of bodies"),
    ("r", "Distance between centers"),
    ("r̂", "Unit vector toward the other body"),
    ("Δt", "Frame time"),
    ("v", "Velocity"),
    ("x", "Position"),
];
