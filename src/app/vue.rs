// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran calculatrice : affichage aligné à droite + pavé (même ordre que l’app mobile)
// - Écran "À propos" : nom, version, réglages
// - Barre de navigation en bas (voir app.rs)
//
// Chaque bouton envoie son libellé tel quel : la correspondance libellé -> jeton
// vit dans le noyau (Jeton::from_str).

use eframe::egui;

use super::etat::{AppCalc, Ecran};
use crate::noyau::format::{format_resultat, JETON_ERREUR};
use crate::noyau::RetourSurErreur;

/// Pavé, rangée par rangée. "0" occupe deux colonnes.
const RANGEES: [&[&str]; 5] = [
    &["C", "DEL", "÷"],
    &["7", "8", "9", "×"],
    &["4", "5", "6", "-"],
    &["1", "2", "3", "+"],
    &["0", ".", "="],
];

const COLONNES: f32 = 4.0;
const HAUTEUR_BOUTON: f32 = 64.0;
const TAILLE_AFFICHAGE: f32 = 44.0;

#[derive(Clone, Copy, Debug)]
enum Genre {
    Chiffre,
    Operation,
    Effacement,
}

fn genre(libelle: &str) -> Genre {
    match libelle {
        "+" | "-" | "×" | "÷" | "=" => Genre::Operation,
        "C" | "DEL" => Genre::Effacement,
        _ => Genre::Chiffre,
    }
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        match self.ecran {
            Ecran::Calculatrice => self.ui_calculatrice(ui),
            Ecran::APropos => self.ui_a_propos(ui),
        }
    }

    pub fn ui_navigation(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let mut cible = self.ecran;
            ui.selectable_value(&mut cible, Ecran::Calculatrice, "Calculatrice");
            ui.selectable_value(&mut cible, Ecran::APropos, "À propos");
            self.aller_a(cible);
        });
    }

    /* ------------------------ Calculatrice ------------------------ */

    fn ui_calculatrice(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(10.0, 10.0);

        self.ui_affichage(ui);
        ui.add_space(8.0);
        self.ui_pave(ui);
    }

    fn ui_affichage(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(egui::Margin::same(16))
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // Opération en attente (petit, au-dessus) : "12 +"
                let attente = self
                    .calc
                    .en_attente()
                    .map(|p| format!("{} {}", format_resultat(p.operande), p.operateur.symbole()))
                    .unwrap_or_default();

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(attente).weak().monospace());
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(self.calc.affichage())
                                .size(TAILLE_AFFICHAGE)
                                .monospace(),
                        )
                        .truncate(),
                    );
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let espace = ui.spacing().item_spacing.x;
        let largeur = ((ui.available_width() - espace * (COLONNES - 1.0)) / COLONNES).max(40.0);

        for rangee in RANGEES {
            ui.horizontal(|ui| {
                let mut occupees = 0.0;
                for &libelle in rangee {
                    let poids = if libelle == "0" { 2.0 } else { 1.0 };
                    let w = largeur * poids + espace * (poids - 1.0);
                    self.bouton(ui, libelle, w);
                    occupees += poids;
                }
                // rangée incomplète (C DEL ÷) : on garde l’alignement des colonnes
                if occupees < COLONNES {
                    ui.add_space((largeur + espace) * (COLONNES - occupees));
                }
            });
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, libelle: &str, largeur: f32) {
        let visuals = ui.visuals();
        let (fond, texte) = match genre(libelle) {
            Genre::Operation => (visuals.selection.bg_fill, visuals.selection.stroke.color),
            Genre::Effacement => (
                visuals.error_fg_color.gamma_multiply(0.25),
                visuals.error_fg_color,
            ),
            Genre::Chiffre => (visuals.widgets.inactive.weak_bg_fill, visuals.text_color()),
        };

        let resp = ui.add_sized(
            [largeur, HAUTEUR_BOUTON],
            egui::Button::new(egui::RichText::new(libelle).size(24.0).color(texte))
                .fill(fond)
                .corner_radius(16.0),
        );
        if resp.clicked() {
            self.presser_libelle(libelle);
        }
    }

    /* ------------------------ À propos ------------------------ */

    fn ui_a_propos(&mut self, ui: &mut egui::Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(24.0);
            ui.heading(crate::TITRE_APP);
            ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
            ui.add_space(16.0);

            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.label(egui::RichText::new("Développeur").strong());
                ui.label("Llucs");
            });

            ui.add_space(16.0);
            ui.label(egui::RichText::new("Fait avec egui / eframe").weak());
        });

        ui.add_space(16.0);
        ui.separator();
        self.ui_reglages(ui);
    }

    fn ui_reglages(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Réglages")
            .default_open(false)
            .show(ui, |ui| {
                ui.checkbox(
                    &mut self.reglages.point_unique,
                    "Un seul point décimal par nombre",
                );

                ui.label(format!("Retour arrière sur « {JETON_ERREUR} » :"));
                ui.radio_value(
                    &mut self.reglages.retour_sur_erreur,
                    RetourSurErreur::Rogner,
                    "rogner caractère par caractère",
                );
                ui.radio_value(
                    &mut self.reglages.retour_sur_erreur,
                    RetourSurErreur::Effacer,
                    "tout effacer",
                );
            });
    }
}
