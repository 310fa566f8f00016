// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppContour (etat.rs) pour natif + wasm
// - Clavier : Enter intègre (quand l’expression a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Boutons z / opérateurs / littéraux : la saisie RPN sans clavier
//
// Note :
// - Les jetons sont séparés par des blancs ; un littéral "( 1, 2 )" reste un seul jeton.

use eframe::egui;

use super::etat::{AppContour, Demarche};
use crate::noyau::eval::{eval_integrale, EntreeIntegrale};

impl AppContour {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Intégrale de contour");
                ui.add_space(6.0);

                self.ui_cercle(ui);

                ui.add_space(8.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
            });
    }

    fn ui_cercle(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("cercle_contour")
            .num_columns(2)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                ui.label("Centre :");
                ui.add(
                    egui::TextEdit::singleline(&mut self.centre)
                        .desired_width(160.0)
                        .hint_text("(re,im)")
                        .id_source("centre_edit")
                        .code_editor(),
                );
                ui.end_row();

                ui.label("Rayon :");
                ui.add(
                    egui::TextEdit::singleline(&mut self.rayon)
                        .desired_width(160.0)
                        .hint_text("> 0")
                        .id_source("rayon_edit")
                        .code_editor(),
                );
                ui.end_row();

                ui.label("n :");
                ui.add(
                    egui::TextEdit::singleline(&mut self.n)
                        .desired_width(160.0)
                        .hint_text("échantillons")
                        .id_source("n_edit")
                        .code_editor(),
                );
                ui.end_row();
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("f(z) en RPN :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.expression)
                .desired_width(ui.available_width())
                .hint_text("Ex: (1,0) z /   |   z ! *   |   z ~")
                .id_source("expression_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter intègre (seulement depuis ce champ) ---
        // singleline rend le focus sur Enter : lost_focus() couvre ce cas
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if (resp.has_focus() || resp.lost_focus()) && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + précision + mode
        ui.horizontal(|ui| {
            // Contrat: C = expression seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’expression", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface résultats + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Lecture :");
            let mut d = self.chiffres as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut d)
                    .speed(1)
                    .range(0..=AppContour::chiffres_max() as u32)
                    .suffix(" chiffres"),
            );
            if resp.changed() {
                self.set_chiffres(d as usize);
            }

            ui.separator();

            ui.checkbox(&mut self.parallele, "parallèle");
        });

        ui.add_space(8.0);

        // Jetons
        ui.horizontal_wrapped(|ui| {
            self.bouton_jeton(ui, "z", "z");
            ui.separator();

            for op in ["+", "-", "*", "/"] {
                self.bouton_jeton(ui, op, op);
            }
            ui.separator();

            self.bouton_jeton(ui, "~", "~").on_hover_text("conjugué");
            self.bouton_jeton(ui, "#", "#").on_hover_text("opposé");
            self.bouton_jeton(ui, "!", "!").on_hover_text("duplique le sommet");
            self.bouton_jeton(ui, ";", ";").on_hover_text("rotation : le fond passe au sommet");
            ui.separator();

            self.bouton_jeton(ui, "1", "(1,0)");
            self.bouton_jeton(ui, "i", "(0,1)");
            self.bouton_action(ui, "DEL", "Efface le dernier jeton", Action::Backspace);

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    /// Retire le dernier jeton complet (un littéral "(…)" part d’un coup).
    fn backspace_entree(&mut self) {
        let fin = self.expression.trim_end().len();
        self.expression.truncate(fin);

        let mut profondeur: usize = 0;
        while let Some(c) = self.expression.pop() {
            match c {
                ')' => profondeur += 1,
                '(' => {
                    profondeur = profondeur.saturating_sub(1);
                    if profondeur == 0 {
                        break;
                    }
                }
                c if c.is_whitespace() && profondeur == 0 => {
                    self.expression.push(c);
                    break;
                }
                // on continue jusqu’au blanc (ou jusqu’à la '(' ouvrante)
                _ => {}
            }
        }

        let fin = self.expression.trim_end().len();
        self.expression.truncate(fin);
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        ui.label("Intégrale :");
        Self::champ_monospace(ui, "canonique_out", &self.canonique, 1);

        ui.add_space(6.0);

        ui.label("Lecture :");
        if self.lecture_dispo {
            Self::champ_monospace(ui, "lecture_out", &self.lecture, 1);
        } else {
            ui.monospace("indisponible");
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "Contour", "demarche_contour", &self.demarche.contour);
                Self::champ_demarche(
                    ui,
                    "Échantillons",
                    "demarche_echantillons",
                    &self.demarche.echantillons,
                );
                Self::champ_demarche(ui, "Mode", "demarche_mode", &self.demarche.mode);
                Self::champ_demarche(ui, "Note", "demarche_note", &self.demarche.note);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    /// Ajoute un jeton en fin d’expression (séparé par un blanc).
    fn bouton_jeton(&mut self, ui: &mut egui::Ui, label: &str, jeton: &str) -> egui::Response {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            self.ajouter_jeton(jeton);
            self.focus_entree = true;
        }
        resp
    }

    fn ajouter_jeton(&mut self, jeton: &str) {
        if !self.expression.is_empty() && !self.expression.ends_with(char::is_whitespace) {
            self.expression.push(' ');
        }
        self.expression.push_str(jeton);
    }

    /// Intègre via le noyau, puis dépose canonique/lecture/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        if let Err(msg) = self.n_borne() {
            self.set_erreur(msg);
            return;
        }

        let entree = EntreeIntegrale {
            centre: self.centre.clone(),
            rayon: self.rayon.clone(),
            n: self.n.clone(),
            expression: self.expression.clone(),
            parallele: self.parallele,
        };

        match eval_integrale(&entree, self.chiffres) {
            Ok(r) => {
                let d_ui = Demarche {
                    jetons: r.demarche.jetons,
                    contour: r.demarche.contour,
                    echantillons: r.demarche.echantillons,
                    mode: r.demarche.mode,
                    note: r.demarche.note,
                };
                self.set_resultats(r.canonique, r.lecture, d_ui);
            }
            Err(e) => self.set_erreur(e.to_string()),
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}
