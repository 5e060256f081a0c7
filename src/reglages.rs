//! src/reglages.rs
//!
//! Réglages de l’application : valeurs par défaut en constantes,
//! surchargeables (natif seulement) par un fichier TOML optionnel :
//!   <config_dir>/calculatrice-rpn/reglages.toml
//!
//! Un fichier absent n’est pas une erreur ; un fichier illisible est signalé
//! (warn) et les valeurs par défaut s’appliquent.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Taille max de l’historique par défaut.
pub const HISTORIQUE_MAX_DEFAUT: usize = 100;

/// Durée d’affichage d’une notification (secondes).
pub const DUREE_NOTIFICATION_DEFAUT: f32 = 2.5;

/// Garde-fous sur la durée des notifications.
const DUREE_NOTIFICATION_MIN: f32 = 0.5;
const DUREE_NOTIFICATION_MAX: f32 = 30.0;

pub const LARGEUR_FENETRE_DEFAUT: f32 = 380.0;
pub const HAUTEUR_FENETRE_DEFAUT: f32 = 640.0;

const DOSSIER_APP: &str = "calculatrice-rpn";
const FICHIER_REGLAGES: &str = "reglages.toml";

#[derive(Debug, Error)]
pub enum ReglagesError {
    #[error("lecture de {chemin:?} impossible: {source}")]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("format invalide dans {chemin:?}: {source}")]
    Format {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Reglages {
    pub historique_max: usize,
    pub duree_notification: f32,
    pub largeur_fenetre: f32,
    pub hauteur_fenetre: f32,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            historique_max: HISTORIQUE_MAX_DEFAUT,
            duree_notification: DUREE_NOTIFICATION_DEFAUT,
            largeur_fenetre: LARGEUR_FENETRE_DEFAUT,
            hauteur_fenetre: HAUTEUR_FENETRE_DEFAUT,
        }
    }
}

impl Reglages {
    /// Parse un contenu TOML (clés absentes => valeurs par défaut).
    pub fn depuis_toml(contenu: &str, chemin: &Path) -> Result<Self, ReglagesError> {
        let r: Reglages = toml::from_str(contenu).map_err(|source| ReglagesError::Format {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Ok(r.borne())
    }

    /// Lit un fichier de réglages ; `Ok(None)` si le fichier n’existe pas.
    pub fn depuis_fichier(chemin: &Path) -> Result<Option<Self>, ReglagesError> {
        let contenu = match std::fs::read_to_string(chemin) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(ReglagesError::Lecture {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };
        Self::depuis_toml(&contenu, chemin).map(Some)
    }

    /// Emplacement standard du fichier (None si pas de dossier de config, ex: wasm).
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER_REGLAGES))
    }

    /// Chargement tolérant : jamais d’échec, les erreurs sont journalisées.
    pub fn charger() -> Self {
        let Some(chemin) = Self::chemin_defaut() else {
            return Self::default();
        };

        match Self::depuis_fichier(&chemin) {
            Ok(Some(r)) => {
                tracing::info!(chemin = %chemin.display(), "réglages chargés");
                r
            }
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("{e} (valeurs par défaut utilisées)");
                Self::default()
            }
        }
    }

    /// Garde-fous : bornes sur les valeurs saisies à la main.
    fn borne(mut self) -> Self {
        self.historique_max = self.historique_max.max(1);
        self.duree_notification = self
            .duree_notification
            .clamp(DUREE_NOTIFICATION_MIN, DUREE_NOTIFICATION_MAX);
        if self.largeur_fenetre.is_nan() || self.largeur_fenetre <= 0.0 {
            self.largeur_fenetre = LARGEUR_FENETRE_DEFAUT;
        }
        if self.hauteur_fenetre.is_nan() || self.hauteur_fenetre <= 0.0 {
            self.hauteur_fenetre = HAUTEUR_FENETRE_DEFAUT;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<Reglages, ReglagesError> {
        Reglages::depuis_toml(s, Path::new("reglages.toml"))
    }

    #[test]
    fn vide_donne_defauts() {
        assert_eq!(parse("").unwrap(), Reglages::default());
    }

    #[test]
    fn surcharge_partielle() {
        let r = parse("historique_max = 5\n").unwrap();
        assert_eq!(r.historique_max, 5);
        assert_eq!(r.duree_notification, DUREE_NOTIFICATION_DEFAUT);
    }

    #[test]
    fn bornes() {
        let r = parse("historique_max = 0\nduree_notification = 999.0\nlargeur_fenetre = -1.0\n")
            .unwrap();
        assert_eq!(r.historique_max, 1);
        assert_eq!(r.duree_notification, DUREE_NOTIFICATION_MAX);
        assert_eq!(r.largeur_fenetre, LARGEUR_FENETRE_DEFAUT);
    }

    #[test]
    fn cle_inconnue_refusee() {
        assert!(matches!(
            parse("historiqe_max = 3\n"),
            Err(ReglagesError::Format { .. })
        ));
    }

    #[test]
    fn fichier_absent() {
        let chemin = std::env::temp_dir().join("calculatrice-rpn-absent/reglages.toml");
        assert!(matches!(Reglages::depuis_fichier(&chemin), Ok(None)));
    }
}
