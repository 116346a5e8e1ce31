// src/app/vue.rs
//
// Vue (UI egui) : natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ est focus) ; Backspace reste au TextEdit
// - Tactile : gros boutons, focus redonné après clic (focus_entree)

use eframe::egui;

use calculatrice_postfixe::noyau::format::format_nombre;
use calculatrice_postfixe::noyau::jetons::format_jetons;
use calculatrice_postfixe::noyau::evaluer_detail;

use super::etat::{AppCalc, Demarche};

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice postfixe");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultat(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_demarche(ui);
                self.ui_regles(ui);
                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 1- (10/5)* 2 +7")
                .id_salt("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
        }

        ui.add_space(6.0);

        // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
        ui.horizontal(|ui| {
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(
                ui,
                "CLR",
                "Efface réponse + erreur + démarche",
                Action::ClearResultats,
            );
            self.bouton_action(
                ui,
                "AC",
                "Remise à zéro totale (historique et règles compris)",
                Action::ResetTotal,
            );
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
        });

        ui.add_space(8.0);

        self.ui_pave(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
            if !self.detail.is_empty() {
                ui.small(&self.detail);
            }
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_postfixe")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_insert(ui, "7", InsertKind::Digit);
                self.bouton_insert(ui, "8", InsertKind::Digit);
                self.bouton_insert(ui, "9", InsertKind::Digit);
                self.bouton_insert(ui, "/", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "4", InsertKind::Digit);
                self.bouton_insert(ui, "5", InsertKind::Digit);
                self.bouton_insert(ui, "6", InsertKind::Digit);
                self.bouton_insert(ui, "*", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "1", InsertKind::Digit);
                self.bouton_insert(ui, "2", InsertKind::Digit);
                self.bouton_insert(ui, "3", InsertKind::Digit);
                self.bouton_insert(ui, "-", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_insert(ui, ".", InsertKind::Digit);
                self.bouton_insert(ui, "(", InsertKind::OpenParen);
                self.bouton_insert(ui, "+", InsertKind::Op);
                ui.end_row();

                self.bouton_insert(ui, ")", InsertKind::CloseParen);
                ui.label("");
                ui.label("");
                let eq = ui.add_sized([46.0, 28.0], egui::Button::new("="));
                if eq.clicked() {
                    self.eval_via_noyau();
                }
                ui.end_row();
            });
    }

    fn ui_resultat(&mut self, ui: &mut egui::Ui) {
        ui.label("Réponse :");
        if self.reponse.is_empty() {
            ui.monospace("(aucune)");
        } else {
            Self::champ_monospace(ui, "reponse_out", &self.reponse, 1);
        }
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(true)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn ui_regles(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Règles")
            .default_open(false)
            .show(ui, |ui| {
                ui.checkbox(
                    &mut self.regles.rejeter_caracteres_inconnus,
                    "Refuser les caractères inconnus (sinon ignorés)",
                );
                ui.checkbox(
                    &mut self.regles.rejeter_nombres_malformes,
                    "Refuser les nombres mal formés (sinon tronqués ou NaN)",
                );
                ui.checkbox(
                    &mut self.regles.rejeter_operandes_en_trop,
                    "Refuser les opérandes en trop (sinon seul le sommet compte)",
                );
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut rappel = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(false)
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.label("vide");
                }
                for (i, l) in self.historique.iter().enumerate() {
                    let reponse = l.reponse.as_deref().unwrap_or("expression incorrecte");
                    if ui.link(format!("{} = {reponse}", l.expression)).clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.rappeler(i);
        }
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 2);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
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

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(label));
        if resp.clicked() {
            inserer(&mut self.entree, label, kind);
            self.focus_entree = true;
        }
    }

    /// DEL : un caractère, puis les blancs qui le précédaient.
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    /// Évalue l’expression via le noyau, puis dépose réponse/démarche dans l’état UI.
    fn eval_via_noyau(&mut self) {
        let s = self.entree.trim().to_string();

        match evaluer_detail(&s, &self.regles) {
            Ok(ev) => {
                let d = Demarche {
                    jetons: format_jetons(&ev.jetons),
                    rpn: format_jetons(&ev.rpn),
                };
                self.set_reponse(&s, format_nombre(ev.valeur), d);
            }
            Err(e) => {
                log::info!("expression refusée {s:?}: {e}");
                self.set_erreur(&s, e.to_string());
            }
        }
    }
}

/// Insertion “jolie” : opérateurs entourés d’un espace, chiffres collés.
fn inserer(entree: &mut String, texte: &str, kind: InsertKind) {
    match kind {
        InsertKind::Digit => entree.push_str(texte),
        InsertKind::Op => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            if !entree.is_empty() {
                entree.push(' ');
            }
            entree.push_str(texte);
            entree.push(' ');
        }
        InsertKind::OpenParen => {
            let last = entree.chars().rev().find(|c| !c.is_whitespace());
            if let Some(c) = last {
                if c.is_ascii_digit() || c == ')' {
                    entree.push(' ');
                }
            }
            entree.push_str(texte);
        }
        InsertKind::CloseParen => {
            while entree.ends_with(' ') {
                entree.pop();
            }
            entree.push_str(texte);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}
