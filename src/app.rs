// src/app.rs
//
// Calculatrice RPN — module App (racine)
// --------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + clavier.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Le clavier est lu ici (une fois par frame), puis chaque commande passe
// par AppCalc::executer, comme les boutons de la vue.

pub mod clavier;
pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let cmds = ctx.input(|i| clavier::commandes(&i.events));
        for cmd in cmds {
            self.executer(cmd);
        }

        if self.historique_ouvert {
            egui::SidePanel::right("panneau_historique")
                .resizable(false)
                .default_width(240.0)
                .show(ctx, |ui| {
                    self.ui_historique(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        self.ui_notification(ctx);
    }
}
