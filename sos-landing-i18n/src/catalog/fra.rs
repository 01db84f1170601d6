//! French translations (fra)

use super::TextNode::{self, Group, Text};

pub static TRANSLATIONS: TextNode = Group(&[
    // ========================================================================
    // Navigation and header
    // ========================================================================
    (
        "nav",
        Group(&[
            ("main", Text("ACCUEIL")),
            ("about", Text("À PROPOS")),
            ("gameFeatures", Text("CARACTÉRISTIQUES")),
            ("systemRequirements", Text("CONFIGURATION REQUISE")),
            ("quotes", Text("AVIS")),
        ]),
    ),
    // ========================================================================
    // Hero section
    // ========================================================================
    (
        "hero",
        Group(&[
            ("title", Text("SURVIVRE À TOUT PRIX")),
            ("subtitle", Text("DÉCOUVREZ LE NOUVEAU JEU SOCIAL BATTLE ROYALE")),
            ("ctaButton", Text("Acheter sur Steam")),
            ("price", Text("$14.99")),
            ("scrollHint", Text("L'HISTOIRE")),
        ]),
    ),
    // ========================================================================
    // Game story section
    // ========================================================================
    (
        "story",
        Group(&[
            ("title", Text("QU'EST-CE QUE SOS?")),
            ("subtitle", Text("JEU SOCIAL BATTLE ROYALE")),
            (
                "description",
                Text("À chaque manche, vous et 15 autres concurrents vous battez pour échapper à une île mortelle remplie de monstres. Le piège : trois personnes peuvent survivre. Allez-vous jouer en solo ou vous lier d'amitié avec d'autres pour vous échapper?"),
            ),
            (
                "gameplay",
                Group(&[
                    ("players", Text("vous et 15 autres concurrents")),
                    ("survivors", Text("trois personnes peuvent survivre")),
                    ("timeLimit", Text("30 minutes")),
                    (
                        "decision",
                        Text("Prendre les bonnes décisions pourrait faire la différence entre la vie et la mort."),
                    ),
                ]),
            ),
        ]),
    ),
    // ========================================================================
    // Game features section
    // ========================================================================
    (
        "features",
        Group(&[
            ("title", Text("QU'EST-CE QUI EST SI SPÉCIAL?")),
            ("subtitle", Text("CARACTÉRISTIQUES")),
            (
                "items",
                Group(&[
                    (
                        "survive",
                        Group(&[
                            ("title", Text("SURVIVRE À TOUT PRIX")),
                            (
                                "description",
                                Text("Vous avez 30 minutes pour trouver une relique, signaler pour l'extraction et prendre l'une des trois places dans l'hélicoptère de sauvetage."),
                            ),
                        ]),
                    ),
                    (
                        "allies",
                        Group(&[
                            ("title", Text("CRÉER DES ALLIÉS ET DES ENNEMIS")),
                            (
                                "description",
                                Text("Formez des alliances stratégiques ou éliminez la concurrence. Chaque relation compte dans cette expérience de survie sociale."),
                            ),
                        ]),
                    ),
                    (
                        "audience",
                        Group(&[
                            ("title", Text("IMPRESSIONNER LE PUBLIC")),
                            (
                                "description",
                                Text("Votre performance est observée et jugée. Faites que chaque décision compte dans ce test ultime de survie."),
                            ),
                        ]),
                    ),
                ]),
            ),
        ]),
    ),
    // ========================================================================
    // System requirements section
    // ========================================================================
    (
        "systemReq",
        Group(&[
            ("title", Text("MON ORDINATEUR PEUT-IL FAIRE TOURNER CE JEU?")),
            ("subtitle", Text("CONFIGURATION REQUISE")),
            (
                "specs",
                Group(&[
                    ("os", Text("OS:")),
                    ("processor", Text("PROCESSEUR:")),
                    ("memory", Text("MÉMOIRE:")),
                    ("storage", Text("STOCKAGE:")),
                    ("graphics", Text("GRAPHIQUES:")),
                ]),
            ),
            (
                "values",
                Group(&[
                    (
                        "os",
                        Text("Windows 7 64-bit uniquement (Pas de support OSX pour le moment)"),
                    ),
                    (
                        "processor",
                        Text("Intel Core 2 Duo @ 2.4 GHZ ou AMD Athlon X2 @ 2.8 GHZ"),
                    ),
                    ("memory", Text("8 Go RAM")),
                    ("storage", Text("8 Go d'espace disponible")),
                    (
                        "graphics",
                        Text("NVIDIA GeForce GTX 660 2Go ou AMD Radeon HD 7850 2Go DirectX11 Shader Model 5"),
                    ),
                ]),
            ),
        ]),
    ),
    // ========================================================================
    // Press reviews section
    // ========================================================================
    (
        "reviews",
        Group(&[
            ("title", Text("QUE PENSENT LES GENS?")),
            ("subtitle", Text("CITATIONS DE PRESSE")),
            (
                "description",
                Text("Notre objectif est de créer un produit et un service dont vous êtes satisfait et que vous utilisez tous les jours. C'est pourquoi nous travaillons constamment sur nos services pour les améliorer chaque jour et écoutons vraiment ce que nos utilisateurs ont à dire."),
            ),
            ("ctaButton", Text("Lire plus de témoignages")),
            (
                "reviewers",
                Group(&[
                    (
                        "evanLahti",
                        Group(&[
                            ("name", Text("EVAN LAHTI")),
                            ("title", Text("PC Gamer")),
                            ("quote", Text("L'un de mes moments forts gaming de l'année.")),
                            ("date", Text("18 octobre 2018")),
                        ]),
                    ),
                    (
                        "jadaGriffin",
                        Group(&[
                            ("name", Text("JADA GRIFFIN")),
                            ("title", Text("Nerdreactor")),
                            (
                                "quote",
                                Text("La prochaine grande chose dans le monde du streaming et des jeux de survie."),
                            ),
                            ("date", Text("21 décembre 2018")),
                        ]),
                    ),
                    (
                        "aaronWilliams",
                        Group(&[
                            ("name", Text("AARON WILLIAMS")),
                            ("title", Text("Uproxx")),
                            (
                                "quote",
                                Text("Snoop Dogg jouant au très divertissant \"SOS\" est ridicule."),
                            ),
                            ("date", Text("24 décembre 2018")),
                        ]),
                    ),
                ]),
            ),
        ]),
    ),
    // ========================================================================
    // Newsletter section
    // ========================================================================
    (
        "newsletter",
        Group(&[
            ("title", Text("VOUS VOULEZ RESTER EN CONTACT?")),
            ("subtitle", Text("INSCRIPTION À LA NEWSLETTER")),
            (
                "description",
                Text("Pour commencer à recevoir nos nouvelles, tout ce que vous avez à faire est de saisir votre adresse email. Nous nous occuperons du reste. Nous vous enverrons des emails contenant des informations sur le jeu. Nous ne spammons pas."),
            ),
            ("placeholder", Text("Votre adresse email")),
            ("ctaButton", Text("S'abonner maintenant")),
            ("privacy", Text("Nous ne spammons pas et respectons votre vie privée.")),
        ]),
    ),
    // ========================================================================
    // Footer
    // ========================================================================
    (
        "footer",
        Group(&[
            ("copyright", Text("© 2018 Outpost Games, Inc. Tous droits réservés")),
            (
                "links",
                Group(&[
                    ("privacy", Text("POLITIQUE DE CONFIDENTIALITÉ")),
                    ("terms", Text("CONDITIONS D'UTILISATION")),
                    ("conduct", Text("CODE DE CONDUITE")),
                ]),
            ),
        ]),
    ),
    // ========================================================================
    // Common elements
    // ========================================================================
    (
        "common",
        Group(&[
            ("loading", Text("Chargement...")),
            ("error", Text("Quelque chose s'est mal passé")),
            ("success", Text("Succès!")),
            ("close", Text("Fermer")),
            ("readMore", Text("Lire la suite")),
        ]),
    ),
]);
