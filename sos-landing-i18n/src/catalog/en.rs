//! English translations (en) — base language

use super::TextNode::{self, Group, Text};

pub static TRANSLATIONS: TextNode = Group(&[
    // ========================================================================
    // Navigation and header
    // ========================================================================
    (
        "nav",
        Group(&[
            ("main", Text("MAIN")),
            ("about", Text("ABOUT")),
            ("gameFeatures", Text("GAME FEATURES")),
            ("systemRequirements", Text("SYSTEM REQUIREMENTS")),
            ("quotes", Text("QUOTES")),
        ]),
    ),
    // ========================================================================
    // Hero section
    // ========================================================================
    (
        "hero",
        Group(&[
            ("title", Text("SURVIVE AT ALL COSTS")),
            ("subtitle", Text("EXPERIENCE NEW SOCIAL BATTLE ROYALE GAME")),
            ("ctaButton", Text("Buy now on Steam")),
            ("price", Text("$14.99")),
            ("scrollHint", Text("THE STORY")),
        ]),
    ),
    // ========================================================================
    // Game story section
    // ========================================================================
    (
        "story",
        Group(&[
            ("title", Text("WHAT IS SOS?")),
            ("subtitle", Text("SOCIAL BATTLE ROYALE GAME")),
            (
                "description",
                Text("Each round, you and 15 other contestants compete to escape a deadly island filled with monsters. The trick is: three people can survive. Will you run solo or form friendships with others to escape?"),
            ),
            (
                "gameplay",
                Group(&[
                    ("players", Text("you and 15 other contestants")),
                    ("survivors", Text("three people can survive")),
                    ("timeLimit", Text("30 minutes")),
                    (
                        "decision",
                        Text("Making the right decisions could be the difference between life and death."),
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
            ("title", Text("WHAT'S SO SPECIAL?")),
            ("subtitle", Text("FEATURES")),
            (
                "items",
                Group(&[
                    (
                        "survive",
                        Group(&[
                            ("title", Text("SURVIVE AT ALL COSTS")),
                            (
                                "description",
                                Text("You have 30 minutes to find a relic, signal for extraction, and grab one of three spots on the rescue chopper."),
                            ),
                        ]),
                    ),
                    (
                        "allies",
                        Group(&[
                            ("title", Text("CREATE ALLIES AND ENEMIES")),
                            (
                                "description",
                                Text("Form strategic alliances or eliminate competition. Every relationship matters in this social survival experience."),
                            ),
                        ]),
                    ),
                    (
                        "audience",
                        Group(&[
                            ("title", Text("IMPRESS THE AUDIENCE")),
                            (
                                "description",
                                Text("Your performance is being watched and judged. Make every decision count in this ultimate test of survival."),
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
            ("title", Text("CAN MY COMPUTER RUN THIS GAME?")),
            ("subtitle", Text("SYSTEM REQUIREMENTS")),
            (
                "specs",
                Group(&[
                    ("os", Text("OS:")),
                    ("processor", Text("PROCESSOR:")),
                    ("memory", Text("MEMORY:")),
                    ("storage", Text("STORAGE:")),
                    ("graphics", Text("GRAPHICS:")),
                ]),
            ),
            (
                "values",
                Group(&[
                    ("os", Text("Windows 7 64-bit only (No OSX support at this time)")),
                    (
                        "processor",
                        Text("Intel Core 2 Duo @ 2.4 GHZ or AMD Athlon X2 @ 2.8 GHZ"),
                    ),
                    ("memory", Text("8 GB RAM")),
                    ("storage", Text("8 GB available space")),
                    (
                        "graphics",
                        Text("NVIDIA GeForce GTX 660 2GB or AMD Radeon HD 7850 2GB DirectX11 Shader Model 5"),
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
            ("title", Text("WHAT PEOPLE THINK?")),
            ("subtitle", Text("PRESS QUOTES")),
            (
                "description",
                Text("Our goal is to create a product and service that you're satisfied with and use it every day. This is why we're constantly working on our services to make it better every day and really listen to what our users has to say."),
            ),
            ("ctaButton", Text("Read more testimonials")),
            (
                "reviewers",
                Group(&[
                    (
                        "evanLahti",
                        Group(&[
                            ("name", Text("EVAN LAHTI")),
                            ("title", Text("PC Gamer")),
                            ("quote", Text("One of my gaming highlights of the year.")),
                            ("date", Text("October 18, 2018")),
                        ]),
                    ),
                    (
                        "jadaGriffin",
                        Group(&[
                            ("name", Text("JADA GRIFFIN")),
                            ("title", Text("Nerdreactor")),
                            (
                                "quote",
                                Text("The next big thing in the world of streaming and survival games."),
                            ),
                            ("date", Text("December 21, 2018")),
                        ]),
                    ),
                    (
                        "aaronWilliams",
                        Group(&[
                            ("name", Text("AARON WILLIAMS")),
                            ("title", Text("Uproxx")),
                            (
                                "quote",
                                Text("Snoop Dogg Playing The Wildly Entertaining 'SOS' Is Ridiculous."),
                            ),
                            ("date", Text("December 24, 2018")),
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
            ("title", Text("WANT TO STAY IN TOUCH?")),
            ("subtitle", Text("NEWSLETTER SUBSCRIBE")),
            (
                "description",
                Text("In order to start receiving our news, all you have to do is enter your email address. Everything else will be taken care of by us. We will send you emails containing information about game. We don't spam."),
            ),
            ("placeholder", Text("Your email address")),
            ("ctaButton", Text("Subscribe now")),
            ("privacy", Text("We don't spam and respect your privacy.")),
        ]),
    ),
    // ========================================================================
    // Footer
    // ========================================================================
    (
        "footer",
        Group(&[
            ("copyright", Text("© 2018 Outpost Games, Inc. All Rights Reserved")),
            (
                "links",
                Group(&[
                    ("privacy", Text("PRIVACY POLICY")),
                    ("terms", Text("TERMS OF SERVICES")),
                    ("conduct", Text("CODE OF CONDUCT")),
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
            ("loading", Text("Loading...")),
            ("error", Text("Something went wrong")),
            ("success", Text("Success!")),
            ("close", Text("Close")),
            ("readMore", Text("Read more")),
        ]),
    ),
]);
