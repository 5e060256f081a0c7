// src/app/clavier.rs
//
// Clavier -> commandes.
// - Texte : chiffres, + - * /, '.', '=', ( ), c/C
// - Touches : Enter (évalue), Backspace (retour), Escape (AC)

use eframe::egui;

use super::etat::Commande;
use crate::noyau::jetons::Operateur;

/// Un caractère tapé => commande (None = ignoré).
pub fn commande_pour_caractere(c: char) -> Option<Commande> {
    match c {
        '0'..='9' | '(' | ')' => Some(Commande::Saisie(c)),
        '.' => Some(Commande::Decimal),
        '=' => Some(Commande::Evaluer),
        'c' | 'C' => Some(Commande::Effacer),
        _ => Operateur::depuis_symbole(c).map(Commande::Operateur),
    }
}

/// Touches sans texte.
pub fn commande_pour_touche(key: egui::Key) -> Option<Commande> {
    match key {
        egui::Key::Enter => Some(Commande::Evaluer),
        egui::Key::Backspace => Some(Commande::Retour),
        egui::Key::Escape => Some(Commande::Effacer),
        _ => None,
    }
}

/// Commandes issues des événements clavier d’une frame (dans l’ordre).
pub fn commandes(events: &[egui::Event]) -> Vec<Commande> {
    let mut out = Vec::new();
    for ev in events {
        match ev {
            egui::Event::Text(t) => out.extend(t.chars().filter_map(commande_pour_caractere)),
            egui::Event::Key {
                key, pressed: true, ..
            } => out.extend(commande_pour_touche(*key)),
            _ => {}
        }
    }
    out
}
