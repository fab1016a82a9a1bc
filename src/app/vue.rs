// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Pas de champ texte : le tampon d'expression vit dans l'état, la vue
//   l'affiche en lecture seule et route boutons + clavier vers etat.rs
// - Tactile : gros boutons, grille 4 colonnes
// - Presse-papiers : Context::copy_text (fire-and-forget, natif + web)
//
// Clavier (file d'événements egui) :
// - chiffres, '.', parenthèses, opérateurs ASCII et glyphes × ÷ − : ajout
// - '=' ou Entrée : commit ; Backspace : retirer ; Échap : effacer
// - 'c' / 'C' : copier le résultat

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité « calc »
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice Arithmétique");
                ui.add_space(6.0);

                self.ui_affichage(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(4.0);

                self.ui_details(ui);
            });
    }

    /* ------------------------ Clavier ------------------------ */

    /// Mappe la file d'événements clavier vers les actions de l'état.
    /// À appeler une fois par frame, avant la construction des panneaux.
    pub fn gerer_clavier(&mut self, ctx: &egui::Context) {
        // Un widget focus (navigation clavier sur un bouton) consomme déjà
        // Entrée/Échap : on ne double pas l'action.
        let widget_focus = ctx.memory(|m| m.focused().is_some());

        let evenements = ctx.input(|i| i.events.clone());
        for evt in evenements {
            match evt {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        self.touche_caractere(ctx, c);
                    }
                }
                egui::Event::Key {
                    key,
                    pressed: true,
                    ..
                } if !widget_focus => match key {
                    egui::Key::Enter => self.valider(),
                    egui::Key::Backspace => self.retirer_dernier(),
                    egui::Key::Escape => self.effacer(),
                    _ => {}
                },
                _ => {}
            }
        }
    }

    fn touche_caractere(&mut self, ctx: &egui::Context, c: char) {
        match c {
            '0'..='9' | '.' | '(' | ')' | '+' | '-' | '*' | '/' | '×' | '÷' | '−' => {
                let mut buf = [0u8; 4];
                self.ajouter(c.encode_utf8(&mut buf));
            }
            '=' => self.valider(),
            'c' | 'C' => self.copier(ctx),
            // tout autre caractère : hors langage, ignoré
            _ => {}
        }
    }

    /* ------------------------ Affichage ------------------------ */

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");
        Self::champ_monospace(ui, "affichage_entree", self.entree(), 1);

        ui.add_space(4.0);

        // Aperçu live : blanc tant que l'expression ne vaut rien ;
        // « Erreur » seulement après un commit raté.
        if self.erreur {
            ui.colored_label(ui.visuals().error_fg_color, "Erreur");
        } else if self.apercu_dispo && self.apercu != self.entree() {
            ui.monospace(format!("= {}", self.apercu));
        }

        ui.add_space(4.0);

        ui.horizontal(|ui| {
            let copier = ui
                .add_enabled(
                    self.texte_a_copier().is_some(),
                    egui::Button::new("Copier"),
                )
                .on_hover_text("Copie le résultat (raccourci : c)");
            if copier.clicked() {
                let ctx = ui.ctx().clone();
                self.copier(&ctx);
            }

            if !self.note_copie.is_empty() {
                ui.weak(self.note_copie.clone());
            }
        });
    }

    /* ------------------------ Pavé ------------------------ */

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface tout (Échap)", Action::Effacer);
                self.bouton_insert(ui, "(");
                self.bouton_insert(ui, ")");
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Retirer);
                ui.end_row();

                self.bouton_insert(ui, "7");
                self.bouton_insert(ui, "8");
                self.bouton_insert(ui, "9");
                self.bouton_insert(ui, "÷");
                ui.end_row();

                self.bouton_insert(ui, "4");
                self.bouton_insert(ui, "5");
                self.bouton_insert(ui, "6");
                self.bouton_insert(ui, "×");
                ui.end_row();

                self.bouton_insert(ui, "1");
                self.bouton_insert(ui, "2");
                self.bouton_insert(ui, "3");
                self.bouton_insert(ui, "−");
                ui.end_row();

                self.bouton_insert(ui, "0");
                self.bouton_insert(ui, ".");
                self.bouton_action(ui, "=", "Évalue l'expression (Entrée)", Action::Valider);
                self.bouton_insert(ui, "+");
                ui.end_row();
            });
    }

    /* ------------------------ Détails ------------------------ */

    fn ui_details(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Détails")
            .default_open(false)
            .show(ui, |ui| match noyau::demarche(self.entree()) {
                Some(d) => {
                    Self::champ_detail(ui, "Jetons", "details_jetons", &d.jetons);
                    Self::champ_detail(ui, "RPN", "details_rpn", &d.rpn);
                }
                None => {
                    ui.weak("indisponible");
                }
            });
    }

    fn champ_detail(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    /* ------------------------ Briques ------------------------ */

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule « stable », sans TextEdit interactif.
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
            .add_sized([56.0, 36.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::Retirer => self.retirer_dernier(),
                Action::Valider => self.valider(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, txt: &str) {
        let resp = ui.add_sized([56.0, 36.0], egui::Button::new(txt));
        if resp.clicked() {
            self.ajouter(txt);
        }
    }

    /* ------------------------ Presse-papiers ------------------------ */

    /// Écrit le résultat courant dans le presse-papiers (si disponible).
    /// Effet lancé-oublié : il ne revient jamais dans l'état d'expression.
    fn copier(&mut self, ctx: &egui::Context) {
        if let Some(txt) = self.texte_a_copier().map(str::to_owned) {
            ctx.copy_text(txt);
            self.noter_copie();
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    Retirer,
    Valider,
}
