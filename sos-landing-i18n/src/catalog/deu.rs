//! German translations (deu)

use super::TextNode::{self, Group, Text};

pub static TRANSLATIONS: TextNode = Group(&[
    // ========================================================================
    // Navigation and header
    // ========================================================================
    (
        "nav",
        Group(&[
            ("main", Text("HAUPTSEITE")),
            ("about", Text("ÜBER UNS")),
            ("gameFeatures", Text("SPIELFEATURES")),
            ("systemRequirements", Text("SYSTEMANFORDERUNGEN")),
            ("quotes", Text("BEWERTUNGEN")),
        ]),
    ),
    // ========================================================================
    // Hero section
    // ========================================================================
    (
        "hero",
        Group(&[
            ("title", Text("UM JEDEN PREIS ÜBERLEBEN")),
            ("subtitle", Text("ERLEBE DAS NEUE SOZIALE BATTLE ROYALE SPIEL")),
            ("ctaButton", Text("Jetzt auf Steam kaufen")),
            ("price", Text("$14.99")),
            ("scrollHint", Text("DIE GESCHICHTE")),
        ]),
    ),
    // ========================================================================
    // Game story section
    // ========================================================================
    (
        "story",
        Group(&[
            ("title", Text("WAS IST SOS?")),
            ("subtitle", Text("SOZIALES BATTLE ROYALE SPIEL")),
            (
                "description",
                Text("Jede Runde kämpfen Sie und 15 andere Teilnehmer darum, von einer tödlichen Insel voller Monster zu entkommen. Der Haken: drei Personen können überleben. Werden Sie alleine spielen oder Freundschaften mit anderen schließen, um zu entkommen?"),
            ),
            (
                "gameplay",
                Group(&[
                    ("players", Text("Sie und 15 andere Teilnehmer")),
                    ("survivors", Text("drei Personen können überleben")),
                    ("timeLimit", Text("30 Minuten")),
                    (
                        "decision",
                        Text("Die richtigen Entscheidungen zu treffen könnte den Unterschied zwischen Leben und Tod ausmachen."),
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
            ("title", Text("WAS IST SO BESONDERS?")),
            ("subtitle", Text("FEATURES")),
            (
                "items",
                Group(&[
                    (
                        "survive",
                        Group(&[
                            ("title", Text("UM JEDEN PREIS ÜBERLEBEN")),
                            (
                                "description",
                                Text("Sie haben 30 Minuten Zeit, um ein Relikt zu finden, ein Extraktionssignal zu senden und einen der drei Plätze im Rettungshubschrauber zu ergattern."),
                            ),
                        ]),
                    ),
                    (
                        "allies",
                        Group(&[
                            ("title", Text("VERBÜNDETE UND FEINDE SCHAFFEN")),
                            (
                                "description",
                                Text("Bilden Sie strategische Allianzen oder eliminieren Sie die Konkurrenz. Jede Beziehung zählt in dieser sozialen Überlebenserfahrung."),
                            ),
                        ]),
                    ),
                    (
                        "audience",
                        Group(&[
                            ("title", Text("DAS PUBLIKUM BEEINDRUCKEN")),
                            (
                                "description",
                                Text("Ihre Leistung wird beobachtet und bewertet. Lassen Sie jede Entscheidung in diesem ultimativen Überlebenstest zählen."),
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
            ("title", Text("KANN MEIN COMPUTER DIESES SPIEL AUSFÜHREN?")),
            ("subtitle", Text("SYSTEMANFORDERUNGEN")),
            (
                "specs",
                Group(&[
                    ("os", Text("BETRIEBSSYSTEM:")),
                    ("processor", Text("PROZESSOR:")),
                    ("memory", Text("ARBEITSSPEICHER:")),
                    ("storage", Text("SPEICHERPLATZ:")),
                    ("graphics", Text("GRAFIK:")),
                ]),
            ),
            (
                "values",
                Group(&[
                    (
                        "os",
                        Text("Windows 7 64-bit nur (Keine OSX-Unterstützung zu diesem Zeitpunkt)"),
                    ),
                    (
                        "processor",
                        Text("Intel Core 2 Duo @ 2.4 GHZ oder AMD Athlon X2 @ 2.8 GHZ"),
                    ),
                    ("memory", Text("8 GB RAM")),
                    ("storage", Text("8 GB verfügbarer Speicherplatz")),
                    (
                        "graphics",
                        Text("NVIDIA GeForce GTX 660 2GB oder AMD Radeon HD 7850 2GB DirectX11 Shader Model 5"),
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
            ("title", Text("WAS DENKEN DIE LEUTE?")),
            ("subtitle", Text("PRESSEZITATE")),
            (
                "description",
                Text("Unser Ziel ist es, ein Produkt und einen Service zu schaffen, mit dem Sie zufrieden sind und den Sie jeden Tag nutzen. Deshalb arbeiten wir ständig an unseren Services, um sie jeden Tag besser zu machen und hören wirklich auf das, was unsere Nutzer zu sagen haben."),
            ),
            ("ctaButton", Text("Mehr Testimonials lesen")),
            (
                "reviewers",
                Group(&[
                    (
                        "evanLahti",
                        Group(&[
                            ("name", Text("EVAN LAHTI")),
                            ("title", Text("PC Gamer")),
                            ("quote", Text("Eines meiner Gaming-Highlights des Jahres.")),
                            ("date", Text("18. Oktober 2018")),
                        ]),
                    ),
                    (
                        "jadaGriffin",
                        Group(&[
                            ("name", Text("JADA GRIFFIN")),
                            ("title", Text("Nerdreactor")),
                            (
                                "quote",
                                Text("Das nächste große Ding in der Welt des Streamings und der Survival-Spiele."),
                            ),
                            ("date", Text("21. Dezember 2018")),
                        ]),
                    ),
                    (
                        "aaronWilliams",
                        Group(&[
                            ("name", Text("AARON WILLIAMS")),
                            ("title", Text("Uproxx")),
                            (
                                "quote",
                                Text("Snoop Dogg spielt das wahnsinnig unterhaltsame \"SOS\" ist lächerlich."),
                            ),
                            ("date", Text("24. Dezember 2018")),
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
            ("title", Text("MÖCHTEN SIE IN KONTAKT BLEIBEN?")),
            ("subtitle", Text("NEWSLETTER ABONNIEREN")),
            (
                "description",
                Text("Um unsere Nachrichten zu erhalten, müssen Sie nur Ihre E-Mail-Adresse eingeben. Um alles andere kümmern wir uns. Wir senden Ihnen E-Mails mit Informationen über das Spiel. Wir spammen nicht."),
            ),
            ("placeholder", Text("Ihre E-Mail-Adresse")),
            ("ctaButton", Text("Jetzt abonnieren")),
            ("privacy", Text("Wir spammen nicht und respektieren Ihre Privatsphäre.")),
        ]),
    ),
    // ========================================================================
    // Footer
    // ========================================================================
    (
        "footer",
        Group(&[
            ("copyright", Text("© 2018 Outpost Games, Inc. Alle Rechte vorbehalten")),
            (
                "links",
                Group(&[
                    ("privacy", Text("DATENSCHUTZERKLÄRUNG")),
                    ("terms", Text("NUTZUNGSBEDINGUNGEN")),
                    ("conduct", Text("VERHALTENSKODEX")),
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
            ("loading", Text("Laden...")),
            ("error", Text("Etwas ist schiefgelaufen")),
            ("success", Text("Erfolg!")),
            ("close", Text("Schließen")),
            ("readMore", Text("Weiterlesen")),
        ]),
    ),
]);
