// src/app.rs
//
// Calculatrice M3 — module App (racine)
// ------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (écran calculatrice seulement) :
// - chiffres, point/virgule, + - * / x : texte tapé -> jetons
// - Enter = "=", Backspace = "⌫", Escape / Delete = "C"

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;
use tracing::trace;

use crate::noyau::Jeton;
use etat::Ecran;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.ecran == Ecran::Calculatrice {
            let jetons = ctx.input(jetons_clavier);
            self.presser_tout(jetons);
        }

        egui::TopBottomPanel::bottom("navigation").show(ctx, |ui| {
            ui.add_space(4.0);
            self.ui_navigation(ui);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}

/// Événements clavier de la frame -> jetons, dans l’ordre d’arrivée.
fn jetons_clavier(i: &egui::InputState) -> Vec<Jeton> {
    let mut out = Vec::new();

    for ev in &i.events {
        match ev {
            egui::Event::Text(t) => {
                for c in t.chars() {
                    match Jeton::depuis_touche(c) {
                        Ok(j) => out.push(j),
                        // frappe quelconque : pas un appui de calculatrice
                        Err(e) => trace!(error = %e, "touche ignorée"),
                    }
                }
            }
            egui::Event::Key {
                key, pressed: true, ..
            } => match key {
                egui::Key::Enter => out.push(Jeton::Egal),
                egui::Key::Backspace => out.push(Jeton::RetourArriere),
                egui::Key::Escape | egui::Key::Delete => out.push(Jeton::Efface),
                _ => {}
            },
            _ => {}
        }
    }

    out
}
