// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Affichage : expression (petit) + valeur (grand), alignés à droite
// - Pavé 4 colonnes + rangée mémoire / historique
// - Panneau historique (côté droit), panneau démarche repliable
// - Notification transitoire en bas de fenêtre
//
// Toutes les actions passent par AppCalc::executer (même chemin que le clavier).

use eframe::egui;

use super::etat::{AppCalc, Commande, GenreNotification};
use crate::noyau::jetons::Operateur as Op;

const TAILLE_TOUCHE: [f32; 2] = [72.0, 48.0];
const TAILLE_TOUCHE_MEMOIRE: [f32; 2] = [56.0, 32.0];

/// Place réservée sous la liste de l’historique (séparateur + bouton).
const RESERVE_PIED_HISTORIQUE: f32 = 40.0;

/// Hauteur de la liste d’historique, jamais négative sur un panneau court.
fn hauteur_liste(disponible: f32) -> f32 {
    (disponible - RESERVE_PIED_HISTORIQUE).max(0.0)
}

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(6.0);

        self.ui_memoire(ui);

        ui.add_space(8.0);
        ui.separator();

        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    let expr = if self.expression.is_empty() {
                        "0"
                    } else {
                        self.expression.as_str()
                    };
                    ui.label(egui::RichText::new(expr).monospace().weak());
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(36.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        use Commande as C;

        let lignes: [[(&str, Commande); 4]; 4] = [
            [
                ("AC", C::Effacer),
                ("(", C::Saisie('(')),
                (")", C::Saisie(')')),
                ("/", C::Operateur(Op::Slash)),
            ],
            [
                ("7", C::Saisie('7')),
                ("8", C::Saisie('8')),
                ("9", C::Saisie('9')),
                ("*", C::Operateur(Op::Star)),
            ],
            [
                ("4", C::Saisie('4')),
                ("5", C::Saisie('5')),
                ("6", C::Saisie('6')),
                ("-", C::Operateur(Op::Minus)),
            ],
            [
                ("1", C::Saisie('1')),
                ("2", C::Saisie('2')),
                ("3", C::Saisie('3')),
                ("+", C::Operateur(Op::Plus)),
            ],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (label, cmd) in ligne {
                        self.bouton(ui, label, cmd, TAILLE_TOUCHE);
                    }
                    ui.end_row();
                }

                self.bouton(ui, "0", C::Saisie('0'), TAILLE_TOUCHE);
                self.bouton(ui, "⌫", C::Retour, TAILLE_TOUCHE);
                self.bouton(ui, ".", C::Decimal, TAILLE_TOUCHE);

                let eq = ui.add_sized(
                    TAILLE_TOUCHE,
                    egui::Button::new(egui::RichText::new("=").strong())
                        .fill(ui.visuals().selection.bg_fill),
                );
                if eq.clicked() {
                    self.executer(C::Evaluer);
                }
                ui.end_row();
            });
    }

    fn ui_memoire(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            self.bouton(ui, "M+", Commande::MemoirePlus, TAILLE_TOUCHE_MEMOIRE);
            self.bouton(ui, "M-", Commande::MemoireMoins, TAILLE_TOUCHE_MEMOIRE);
            self.bouton(ui, "MR", Commande::MemoireRappel, TAILLE_TOUCHE_MEMOIRE);
            self.bouton(ui, "MC", Commande::MemoireEffacer, TAILLE_TOUCHE_MEMOIRE);

            let libelle = if self.historique_ouvert {
                "Historique ▸"
            } else {
                "Historique"
            };
            if ui
                .add_sized([96.0, 32.0], egui::Button::new(libelle))
                .clicked()
            {
                self.historique_ouvert = !self.historique_ouvert;
            }
        });
    }

    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &self.demarche.jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &self.demarche.rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }

    /// Panneau historique (plus récent en tête). Clic = reprendre l’expression.
    pub fn ui_historique(&mut self, ui: &mut egui::Ui) {
        ui.heading("Historique");
        ui.add_space(4.0);

        let mut rappel: Option<usize> = None;

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .max_height(hauteur_liste(ui.available_height()))
            .show(ui, |ui| {
                if self.historique.is_empty() {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.strong("Aucun calcul pour l’instant");
                        ui.weak("Vos calculs apparaîtront ici.");
                    });
                    return;
                }

                for (i, entree) in self.historique.iter().enumerate() {
                    let resp = egui::Frame::group(ui.style())
                        .show(ui, |ui| {
                            ui.set_min_width(ui.available_width());
                            ui.weak(format!("{} =", entree.expression));
                            ui.label(egui::RichText::new(&entree.resultat).strong().size(18.0));
                            ui.small(entree.horodatage.format("%d/%m/%Y %H:%M:%S").to_string());
                        })
                        .response
                        .interact(egui::Sense::click())
                        .on_hover_cursor(egui::CursorIcon::PointingHand);

                    if resp.clicked() {
                        rappel = Some(i);
                    }
                }
            });

        if let Some(i) = rappel {
            self.executer(Commande::HistoriqueRappel(i));
        }

        ui.separator();
        if ui.button("Effacer l’historique").clicked() {
            self.executer(Commande::HistoriqueEffacer);
        }
    }

    /// Notification transitoire (bas de fenêtre), expirée via l’horloge egui.
    pub fn ui_notification(&mut self, ctx: &egui::Context) {
        self.vieillir_notification(ctx.input(|i| i.time));

        let Some(n) = &self.notification else {
            return;
        };

        let couleur = match n.genre {
            GenreNotification::Succes => egui::Color32::from_rgb(46, 160, 67),
            GenreNotification::Erreur => ctx.style().visuals.error_fg_color,
            GenreNotification::Info => ctx.style().visuals.text_color(),
        };

        egui::Area::new(egui::Id::new("notification"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -16.0])
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(couleur, &n.message);
                });
            });

        // redessine pour faire disparaître la notification à temps
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, cmd: Commande, taille: [f32; 2]) {
        let resp = ui.add_sized(taille, egui::Button::new(egui::RichText::new(label).size(18.0)));
        if resp.clicked() {
            self.executer(cmd);
        }
    }
}
