//! Tests de transitions : scénarios de pavé, un appui après l’autre.
//!
//! Chaque test part d’un état connu et vérifie l’affichage + l’opération en attente.

use super::accumulateur::{appliquer, appliquer_avec, appliquer_tout, EnAttente, EtatCalc};
use super::format::JETON_ERREUR;
use super::jetons::{Jeton, Operateur};
use super::reglages::{Reglages, RetourSurErreur};

/// Suite de libellés de boutons -> jetons (panique si un libellé est inconnu).
fn jetons(libelles: &str) -> Vec<Jeton> {
    libelles
        .split_whitespace()
        .map(|l| {
            l.parse()
                .unwrap_or_else(|e| panic!("libellé {l:?} invalide: {e}"))
        })
        .collect()
}

fn tape(libelles: &str) -> EtatCalc {
    appliquer_tout(&Reglages::default(), &EtatCalc::initial(), jetons(libelles))
}

fn tape_avec(reglages: &Reglages, depart: &EtatCalc, libelles: &str) -> EtatCalc {
    appliquer_tout(reglages, depart, jetons(libelles))
}

fn assert_affiche(libelles: &str, attendu: &str) {
    let e = tape(libelles);
    assert_eq!(e.affichage(), attendu, "séquence={libelles:?}");
}

/* ------------------------ État initial / C ------------------------ */

#[test]
fn etat_initial() {
    let e = EtatCalc::initial();
    assert_eq!(e.affichage(), "0");
    assert!(e.en_attente().is_none());
    assert!(!e.attend_nouvelle_saisie());
    assert_eq!(e, EtatCalc::default());
}

#[test]
fn efface_remet_a_zero() {
    for seq in ["1 2 3", "5 + 6", "8 ÷ 0 =", "1 . 5 × ⌫", "9 - 3 = 4"] {
        let e = appliquer(&tape(seq), Jeton::Efface);
        assert_eq!(e, EtatCalc::initial(), "séquence={seq:?}");
    }
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn chiffres_concatenes() {
    assert_affiche("1 2 3", "123");
    assert_affiche("0 0 7", "7");
    assert_affiche("4 0 0", "400");
}

#[test]
fn point_sur_zero_remplace() {
    // "0" est remplacé, même par le point (comportement d’origine)
    assert_affiche(".", ".");
    assert_affiche(". 5", ".5");
    assert_affiche("0 . 5", ".5");
    assert_affiche("3 . 1 4", "3.14");
}

#[test]
fn second_point_ignore_par_defaut() {
    assert_affiche("1 . 2 . 3", "1.23");
    assert_affiche(". .", ".");
}

#[test]
fn second_point_accepte_en_mode_historique() {
    let brut = Reglages {
        point_unique: false,
        ..Reglages::default()
    };
    let e = tape_avec(&brut, &EtatCalc::initial(), "1 . 2 . 3");
    assert_eq!(e.affichage(), "1.2.3");

    // Texte illisible : l’opérande vaut 0.0
    let e = tape_avec(&brut, &e, "+ 4 =");
    assert_eq!(e.affichage(), "4");
}

#[test]
fn point_apres_operateur_repart() {
    let e = tape("1 . 5 + .");
    assert_eq!(e.affichage(), ".");
    let e = appliquer_tout(&Reglages::default(), &e, jetons("5 ="));
    assert_eq!(e.affichage(), "2");
}

#[test]
fn chiffre_hors_borne_ignore() {
    let e = tape("4");
    assert_eq!(appliquer(&e, Jeton::Chiffre(12)), e);
}

/* ------------------------ Retour arrière ------------------------ */

#[test]
fn retour_arriere_un_caractere() {
    assert_affiche("1 2 3 ⌫", "12");
    assert_affiche("1 . ⌫", "1");
}

#[test]
fn retour_arriere_jamais_vide() {
    assert_affiche("7 ⌫", "0");
    assert_affiche("⌫", "0");
    assert_affiche("⌫ ⌫ ⌫", "0");
}

#[test]
fn retour_arriere_garde_l_operation() {
    let e = tape("1 2 + 3 4 ⌫");
    assert_eq!(e.affichage(), "3");
    assert_eq!(
        e.en_attente(),
        Some(EnAttente {
            operande: 12.0,
            operateur: Operateur::Plus,
        })
    );
    let e = appliquer(&e, Jeton::Egal);
    assert_eq!(e.affichage(), "15");
}

#[test]
fn retour_arriere_sur_erreur_rogne() {
    let e = tape("8 ÷ 0 =");
    assert_eq!(e.affichage(), JETON_ERREUR);

    let e = appliquer(&e, Jeton::RetourArriere);
    assert_eq!(e.affichage(), "Err");

    // "Err" vaut 0.0 pour un opérateur
    let e2 = tape_avec(&Reglages::default(), &e, "+ 2 =");
    assert_eq!(e2.affichage(), "2");

    // ⌫ ne lève pas l’attente posée par "=" : le chiffre repart
    assert!(e.attend_nouvelle_saisie());
    assert_eq!(appliquer(&e, Jeton::Chiffre(5)).affichage(), "5");
}

#[test]
fn texte_rogne_hors_attente_recoit_les_chiffres() {
    // "Err" n’est plus le jeton d’erreur : hors attente, un chiffre s’ajoute derrière
    let e = EtatCalc::depuis_affichage("Err");
    let e = appliquer(&e, Jeton::Chiffre(5));
    assert_eq!(e.affichage(), "Err5");
}

#[test]
fn retour_arriere_sur_erreur_efface_si_demande() {
    let r = Reglages {
        retour_sur_erreur: RetourSurErreur::Effacer,
        ..Reglages::default()
    };
    let e = tape_avec(&r, &EtatCalc::initial(), "8 ÷ 0 = ⌫");
    assert_eq!(e, EtatCalc::initial());

    // Hors erreur : rognage normal
    let e = tape_avec(&r, &EtatCalc::initial(), "4 2 ⌫");
    assert_eq!(e.affichage(), "4");
}

/* ------------------------ Opérateurs ------------------------ */

#[test]
fn operateur_garde_l_affichage() {
    let e = tape("5 +");
    assert_eq!(e.affichage(), "5");
    assert!(e.attend_nouvelle_saisie());
    assert_eq!(
        e.en_attente(),
        Some(EnAttente {
            operande: 5.0,
            operateur: Operateur::Plus,
        })
    );
}

#[test]
fn dernier_operateur_gagne() {
    let e = tape("5 + -");
    assert_eq!(
        e.en_attente(),
        Some(EnAttente {
            operande: 5.0,
            operateur: Operateur::Moins,
        })
    );
}

#[test]
fn pas_d_enchainement() {
    // 2 + 3 × 4 : le "+" est écrasé par "×", opérande 3
    assert_affiche("2 + 3 × 4 =", "12");
}

#[test]
fn operateur_sur_erreur_vaut_zero() {
    let e = tape("8 ÷ 0 = +");
    assert_eq!(
        e.en_attente(),
        Some(EnAttente {
            operande: 0.0,
            operateur: Operateur::Plus,
        })
    );
    let e = appliquer_tout(&Reglages::default(), &e, jetons("7 ="));
    assert_eq!(e.affichage(), "7");
}

/* ------------------------ Égal ------------------------ */

#[test]
fn egal_sans_operation_ne_fait_rien() {
    let e = tape("4 2");
    assert_eq!(appliquer(&e, Jeton::Egal), e);
    assert_eq!(appliquer(&EtatCalc::initial(), Jeton::Egal), EtatCalc::initial());
}

#[test]
fn table_des_operations() {
    assert_affiche("7 + 5 =", "12");
    assert_affiche("7 - 5 =", "2");
    assert_affiche("5 - 7 =", "-2");
    assert_affiche("3 × 4 =", "12");
    assert_affiche("1 ÷ 4 =", "0.25");
    assert_affiche("1 . 5 + 2 . 5 =", "4");
    assert_affiche("4 . 5 × 1 =", "4.5");
}

#[test]
fn division_par_zero() {
    let e = tape("8 ÷ 0 =");
    assert_eq!(e.affichage(), JETON_ERREUR);
    assert!(e.en_attente().is_none());
    assert!(e.attend_nouvelle_saisie());
    assert_affiche("0 ÷ 0 =", JETON_ERREUR);
}

#[test]
fn egal_consomme_l_operation() {
    let e = tape("6 × 7 =");
    assert_eq!(e.affichage(), "42");
    assert!(e.en_attente().is_none());
    assert!(e.attend_nouvelle_saisie());

    // second "=" : plus rien en attente
    assert_eq!(appliquer(&e, Jeton::Egal), e);
}

#[test]
fn egal_directement_apres_operateur() {
    // l’opérande droite est l’affichage courant (= gauche)
    assert_affiche("5 + =", "10");
}

#[test]
fn chiffre_apres_resultat_repart() {
    assert_affiche("2 + 2 = 9", "9");
    assert_affiche("8 ÷ 0 = 3", "3");
}

#[test]
fn resultat_reutilise() {
    assert_affiche("2 + 3 = × 4 =", "20");
}

#[test]
fn addition_de_zero_est_l_identite() {
    for depart in ["0", "12", "3.5", ".25", JETON_ERREUR] {
        let s = EtatCalc::depuis_affichage(depart);
        let attendu = super::format::lire_nombre(depart);
        let e = appliquer(&appliquer(&s, Jeton::Op(Operateur::Plus)), Jeton::Egal);
        // "=" relit l’affichage ; sans saisie, gauche == droite
        assert_eq!(
            super::format::lire_nombre(e.affichage()),
            attendu + attendu,
            "départ={depart:?}"
        );

        let e = tape_avec(&Reglages::default(), &s, "+ 0 =");
        assert_eq!(
            super::format::lire_nombre(e.affichage()),
            attendu,
            "départ={depart:?}"
        );
    }
}

#[test]
fn depuis_affichage_vide() {
    assert_eq!(EtatCalc::depuis_affichage(""), EtatCalc::initial());
}

#[test]
fn appliquer_avec_defaut_equivaut_appliquer() {
    let e = tape("1 2 +");
    for j in jetons("3 . ⌫ = C + ×") {
        assert_eq!(appliquer(&e, j), appliquer_avec(&Reglages::default(), &e, j));
    }
}
