//! Russian translations (rus)

use super::TextNode::{self, Group, Text};

pub static TRANSLATIONS: TextNode = Group(&[
    // ========================================================================
    // Navigation and header
    // ========================================================================
    (
        "nav",
        Group(&[
            ("main", Text("ГЛАВНАЯ")),
            ("about", Text("О ИГРЕ")),
            ("gameFeatures", Text("ОСОБЕННОСТИ")),
            ("systemRequirements", Text("СИСТЕМНЫЕ ТРЕБОВАНИЯ")),
            ("quotes", Text("ОТЗЫВЫ")),
        ]),
    ),
    // ========================================================================
    // Hero section
    // ========================================================================
    (
        "hero",
        Group(&[
            ("title", Text("ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ")),
            ("subtitle", Text("ИСПЫТАЙ НОВУЮ СОЦИАЛЬНУЮ КОРОЛЕВСКУЮ БИТВУ")),
            ("ctaButton", Text("Купить в Steam")),
            ("price", Text("$14.99")),
            ("scrollHint", Text("ИСТОРИЯ")),
        ]),
    ),
    // ========================================================================
    // Game story section
    // ========================================================================
    (
        "story",
        Group(&[
            ("title", Text("ЧТО ТАКОЕ SOS?")),
            ("subtitle", Text("СОЦИАЛЬНАЯ КОРОЛЕВСКАЯ БИТВА")),
            (
                "description",
                Text("Каждый раунд вы и 15 других участников соревнуетесь, чтобы сбежать с смертоносного острова, полного монстров. Хитрость в том, что выжить могут только три человека. Будете ли вы действовать в одиночку или заведете друзей, чтобы сбежать?"),
            ),
            (
                "gameplay",
                Group(&[
                    ("players", Text("вы и 15 других участников")),
                    ("survivors", Text("выжить могут три человека")),
                    ("timeLimit", Text("30 минут")),
                    (
                        "decision",
                        Text("Правильные решения могут стать разницей между жизнью и смертью."),
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
            ("title", Text("ЧТО ОСОБЕННОГО?")),
            ("subtitle", Text("ОСОБЕННОСТИ")),
            (
                "items",
                Group(&[
                    (
                        "survive",
                        Group(&[
                            ("title", Text("ВЫЖИВИ ЛЮБОЙ ЦЕНОЙ")),
                            (
                                "description",
                                Text("У вас есть 30 минут, чтобы найти реликвию, подать сигнал для эвакуации и занять одно из трех мест в спасательном вертолете."),
                            ),
                        ]),
                    ),
                    (
                        "allies",
                        Group(&[
                            ("title", Text("СОЗДАВАЙ СОЮЗНИКОВ И ВРАГОВ")),
                            (
                                "description",
                                Text("Формируйте стратегические альянсы или устраняйте конкуренцию. Каждые отношения важны в этом социальном опыте выживания."),
                            ),
                        ]),
                    ),
                    (
                        "audience",
                        Group(&[
                            ("title", Text("ПРОИЗВЕДИ ВПЕЧАТЛЕНИЕ НА ЗРИТЕЛЕЙ")),
                            (
                                "description",
                                Text("За вашим выступлением наблюдают и судят. Делайте каждое решение важным в этом окончательном тесте на выживание."),
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
            ("title", Text("ПОТЯНЕТ ЛИ МОЙ КОМПЬЮТЕР ЭТУ ИГРУ?")),
            ("subtitle", Text("СИСТЕМНЫЕ ТРЕБОВАНИЯ")),
            (
                "specs",
                Group(&[
                    ("os", Text("ОС:")),
                    ("processor", Text("ПРОЦЕССОР:")),
                    ("memory", Text("ПАМЯТЬ:")),
                    ("storage", Text("ХРАНИЛИЩЕ:")),
                    ("graphics", Text("ГРАФИКА:")),
                ]),
            ),
            (
                "values",
                Group(&[
                    (
                        "os",
                        Text("Windows 7 64-bit только (Поддержка OSX пока недоступна)"),
                    ),
                    (
                        "processor",
                        Text("Intel Core 2 Duo @ 2.4 ГГц или AMD Athlon X2 @ 2.8 ГГц"),
                    ),
                    ("memory", Text("8 ГБ ОЗУ")),
                    ("storage", Text("8 ГБ свободного места")),
                    (
                        "graphics",
                        Text("NVIDIA GeForce GTX 660 2ГБ или AMD Radeon HD 7850 2ГБ DirectX11 Shader Model 5"),
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
            ("title", Text("ЧТО ДУМАЮТ ЛЮДИ?")),
            ("subtitle", Text("ОТЗЫВЫ ПРЕССЫ")),
            (
                "description",
                Text("Наша цель - создать продукт и сервис, которым вы будете довольны и будете пользоваться каждый день. Поэтому мы постоянно работаем над нашими сервисами, чтобы делать их лучше каждый день и действительно прислушиваемся к тому, что говорят наши пользователи."),
            ),
            ("ctaButton", Text("Читать больше отзывов")),
            (
                "reviewers",
                Group(&[
                    (
                        "evanLahti",
                        Group(&[
                            ("name", Text("ЭВАН ЛАХТИ")),
                            ("title", Text("PC Gamer")),
                            ("quote", Text("Один из моих игровых хитов года.")),
                            ("date", Text("18 октября 2018")),
                        ]),
                    ),
                    (
                        "jadaGriffin",
                        Group(&[
                            ("name", Text("ДЖАДА ГРИФФИН")),
                            ("title", Text("Nerdreactor")),
                            (
                                "quote",
                                Text("Следующая большая вещь в мире стриминга и игр на выживание."),
                            ),
                            ("date", Text("21 декабря 2018")),
                        ]),
                    ),
                    (
                        "aaronWilliams",
                        Group(&[
                            ("name", Text("ААРОН УИЛЬЯМС")),
                            ("title", Text("Uproxx")),
                            (
                                "quote",
                                Text("Snoop Dogg играет в дико развлекательную \"SOS\" - это нелепо."),
                            ),
                            ("date", Text("24 декабря 2018")),
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
            ("title", Text("ХОТИТЕ ОСТАВАТЬСЯ НА СВЯЗИ?")),
            ("subtitle", Text("ПОДПИСКА НА НОВОСТИ")),
            (
                "description",
                Text("Чтобы начать получать наши новости, все, что вам нужно сделать, это ввести свой email адрес. Обо всем остальном позаботимся мы. Мы будем отправлять вам emails с информацией об игре. Мы не спамим."),
            ),
            ("placeholder", Text("Ваш email адрес")),
            ("ctaButton", Text("Подписаться")),
            ("privacy", Text("Мы не спамим и уважаем вашу конфиденциальность.")),
        ]),
    ),
    // ========================================================================
    // Footer
    // ========================================================================
    (
        "footer",
        Group(&[
            ("copyright", Text("© 2018 Outpost Games, Inc. Все права защищены")),
            (
                "links",
                Group(&[
                    ("privacy", Text("ПОЛИТИКА КОНФИДЕНЦИАЛЬНОСТИ")),
                    ("terms", Text("УСЛОВИЯ ОБСЛУЖИВАНИЯ")),
                    ("conduct", Text("КОДЕКС ПОВЕДЕНИЯ")),
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
            ("loading", Text("Загрузка...")),
            ("error", Text("Что-то пошло не так")),
            ("success", Text("Успех!")),
            ("close", Text("Закрыть")),
            ("readMore", Text("Читать далее")),
        ]),
    ),
]);
