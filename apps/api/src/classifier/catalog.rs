//! The built-in marketplace catalog: every postable category with its picker
//! path, trigger keywords and audience tag. Keywords must stay lowercase —
//! scoring and search match them against lowercased listing text without
//! re-normalizing.

use crate::classifier::taxonomy::{Category, Gender};

pub const CATALOG: &[Category] = &[
    // ==================== FEMMES - VÊTEMENTS ====================
    // Hauts
    Category {
        id: 1,
        name: "T-shirts",
        path: &["Femmes", "Vêtements", "Hauts", "T-shirts"],
        keywords: &["t-shirt", "tshirt", "tee-shirt", "tee shirt", "t shirt"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 2,
        name: "Débardeurs",
        path: &["Femmes", "Vêtements", "Hauts", "Débardeurs et tops sans manches"],
        keywords: &[
            "débardeur",
            "debardeur",
            "top sans manche",
            "top",
            "brassière",
            "crop top",
            "crop-top",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 3,
        name: "Chemises et blouses",
        path: &["Femmes", "Vêtements", "Hauts", "Chemises et blouses"],
        keywords: &["chemise", "blouse", "chemisier", "tunique"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 4,
        name: "Pulls et sweats",
        path: &["Femmes", "Vêtements", "Hauts", "Pulls et sweats"],
        keywords: &[
            "pull",
            "sweat",
            "sweatshirt",
            "hoodie",
            "gilet",
            "cardigan",
            "tricot",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 5,
        name: "Vestes et manteaux",
        path: &["Femmes", "Vêtements", "Manteaux et vestes"],
        keywords: &[
            "veste",
            "manteau",
            "blouson",
            "parka",
            "doudoune",
            "trench",
            "blazer",
            "perfecto",
            "bombers",
            "bomber",
        ],
        gender: Some(Gender::Femme),
    },
    // Bas
    Category {
        id: 10,
        name: "Jeans",
        path: &["Femmes", "Vêtements", "Bas", "Jeans"],
        keywords: &["jean", "jeans", "denim"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 11,
        name: "Pantalons",
        path: &["Femmes", "Vêtements", "Bas", "Pantalons"],
        keywords: &["pantalon", "pantacourt", "chino", "cargo", "jogger", "jogging"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 12,
        name: "Shorts",
        path: &["Femmes", "Vêtements", "Bas", "Shorts"],
        keywords: &["short", "bermuda"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 13,
        name: "Jupes",
        path: &["Femmes", "Vêtements", "Bas", "Jupes"],
        keywords: &["jupe", "mini-jupe", "minijupe"],
        gender: Some(Gender::Femme),
    },
    // Robes
    Category {
        id: 20,
        name: "Robes",
        path: &["Femmes", "Vêtements", "Robes"],
        keywords: &[
            "robe",
            "robe longue",
            "robe courte",
            "robe midi",
            "robe de soirée",
            "robe d'été",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 21,
        name: "Combinaisons",
        path: &["Femmes", "Vêtements", "Combinaisons et combishorts"],
        keywords: &["combinaison", "combishort", "jumpsuit", "salopette"],
        gender: Some(Gender::Femme),
    },
    // Chaussures femmes
    Category {
        id: 30,
        name: "Baskets",
        path: &["Femmes", "Chaussures", "Baskets"],
        keywords: &["basket", "baskets", "sneakers", "sneaker", "tennis"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 31,
        name: "Escarpins",
        path: &["Femmes", "Chaussures", "Escarpins"],
        keywords: &["escarpin", "escarpins", "talon", "talons", "stiletto"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 32,
        name: "Sandales",
        path: &["Femmes", "Chaussures", "Sandales"],
        keywords: &[
            "sandale",
            "sandales",
            "tong",
            "tongs",
            "claquette",
            "claquettes",
            "mule",
            "mules",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 33,
        name: "Bottes",
        path: &["Femmes", "Chaussures", "Bottes"],
        keywords: &["botte", "bottes", "bottine", "bottines", "boots", "cuissardes"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 34,
        name: "Ballerines",
        path: &["Femmes", "Chaussures", "Ballerines"],
        keywords: &["ballerine", "ballerines"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 35,
        name: "Mocassins",
        path: &["Femmes", "Chaussures", "Mocassins et chaussures bateau"],
        keywords: &["mocassin", "mocassins", "loafer", "loafers", "derbies", "derby"],
        gender: Some(Gender::Femme),
    },
    // Sacs femmes
    Category {
        id: 40,
        name: "Sacs à main",
        path: &["Femmes", "Sacs", "Sacs à main"],
        keywords: &["sac à main", "sac a main", "sacoche", "cabas"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 41,
        name: "Sacs bandoulière",
        path: &["Femmes", "Sacs", "Sacs bandoulière"],
        keywords: &["sac bandoulière", "sac bandouliere", "besace", "pochette"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 42,
        name: "Sacs à dos",
        path: &["Femmes", "Sacs", "Sacs à dos"],
        keywords: &["sac à dos", "sac a dos", "backpack"],
        gender: Some(Gender::Femme),
    },
    // Accessoires femmes
    Category {
        id: 50,
        name: "Bijoux",
        path: &["Femmes", "Accessoires", "Bijoux"],
        keywords: &[
            "bijou",
            "bijoux",
            "collier",
            "bracelet",
            "bague",
            "boucle d'oreille",
            "boucles d'oreilles",
            "pendentif",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 51,
        name: "Ceintures",
        path: &["Femmes", "Accessoires", "Ceintures"],
        keywords: &["ceinture"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 52,
        name: "Écharpes et foulards",
        path: &["Femmes", "Accessoires", "Écharpes, foulards et châles"],
        keywords: &[
            "écharpe",
            "echarpe",
            "foulard",
            "châle",
            "chale",
            "pashmina",
            "étole",
            "etole",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 53,
        name: "Chapeaux et casquettes",
        path: &["Femmes", "Accessoires", "Chapeaux et casquettes"],
        keywords: &["chapeau", "casquette", "bonnet", "béret", "beret", "bob", "capeline"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 54,
        name: "Lunettes de soleil",
        path: &["Femmes", "Accessoires", "Lunettes de soleil"],
        keywords: &["lunette", "lunettes", "soleil", "sunglasses"],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 55,
        name: "Montres",
        path: &["Femmes", "Accessoires", "Montres"],
        keywords: &["montre"],
        gender: Some(Gender::Femme),
    },
    // ==================== HOMMES - VÊTEMENTS ====================
    // Hauts
    Category {
        id: 100,
        name: "T-shirts",
        path: &["Hommes", "Vêtements", "Hauts", "T-shirts"],
        keywords: &["t-shirt", "tshirt", "tee-shirt", "tee shirt", "t shirt"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 101,
        name: "Chemises",
        path: &["Hommes", "Vêtements", "Hauts", "Chemises"],
        keywords: &["chemise", "chemisette"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 102,
        name: "Pulls et sweats",
        path: &["Hommes", "Vêtements", "Hauts", "Pulls et sweats"],
        keywords: &["pull", "sweat", "sweatshirt", "hoodie", "gilet", "cardigan"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 103,
        name: "Polos",
        path: &["Hommes", "Vêtements", "Hauts", "Polos"],
        keywords: &["polo"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 104,
        name: "Vestes et manteaux",
        path: &["Hommes", "Vêtements", "Manteaux et vestes"],
        keywords: &[
            "veste",
            "manteau",
            "blouson",
            "parka",
            "doudoune",
            "blazer",
            "perfecto",
            "bombers",
            "bomber",
        ],
        gender: Some(Gender::Homme),
    },
    // Bas hommes
    Category {
        id: 110,
        name: "Jeans",
        path: &["Hommes", "Vêtements", "Bas", "Jeans"],
        keywords: &["jean", "jeans", "denim"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 111,
        name: "Pantalons",
        path: &["Hommes", "Vêtements", "Bas", "Pantalons"],
        keywords: &["pantalon", "chino", "cargo", "jogger", "jogging"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 112,
        name: "Shorts",
        path: &["Hommes", "Vêtements", "Bas", "Shorts"],
        keywords: &["short", "bermuda"],
        gender: Some(Gender::Homme),
    },
    // Chaussures hommes
    Category {
        id: 120,
        name: "Baskets",
        path: &["Hommes", "Chaussures", "Baskets"],
        keywords: &["basket", "baskets", "sneakers", "sneaker", "tennis"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 121,
        name: "Chaussures de ville",
        path: &["Hommes", "Chaussures", "Chaussures de ville"],
        keywords: &[
            "chaussure de ville",
            "richelieu",
            "derby",
            "oxford",
            "mocassin",
            "loafer",
        ],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 122,
        name: "Bottes",
        path: &["Hommes", "Chaussures", "Bottes"],
        keywords: &["botte", "bottes", "bottine", "bottines", "boots", "chelsea"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 123,
        name: "Sandales",
        path: &["Hommes", "Chaussures", "Sandales"],
        keywords: &["sandale", "sandales", "tong", "tongs", "claquette", "claquettes"],
        gender: Some(Gender::Homme),
    },
    // Sacs hommes
    Category {
        id: 130,
        name: "Sacs à dos",
        path: &["Hommes", "Sacs", "Sacs à dos"],
        keywords: &["sac à dos", "sac a dos", "backpack"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 131,
        name: "Sacoches",
        path: &["Hommes", "Sacs", "Besaces et sacoches"],
        keywords: &["sacoche", "besace", "messenger", "bandoulière", "bandouliere"],
        gender: Some(Gender::Homme),
    },
    // Accessoires hommes
    Category {
        id: 140,
        name: "Ceintures",
        path: &["Hommes", "Accessoires", "Ceintures"],
        keywords: &["ceinture"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 141,
        name: "Chapeaux et casquettes",
        path: &["Hommes", "Accessoires", "Chapeaux et casquettes"],
        keywords: &["chapeau", "casquette", "bonnet", "bob", "béret"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 142,
        name: "Montres",
        path: &["Hommes", "Accessoires", "Montres"],
        keywords: &["montre"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 143,
        name: "Lunettes de soleil",
        path: &["Hommes", "Accessoires", "Lunettes de soleil"],
        keywords: &["lunette", "lunettes", "soleil"],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 144,
        name: "Cravates et nœuds papillon",
        path: &["Hommes", "Accessoires", "Cravates et nœuds papillon"],
        keywords: &["cravate", "noeud papillon", "nœud papillon"],
        gender: Some(Gender::Homme),
    },
    // ==================== ENFANTS ====================
    // Filles
    Category {
        id: 200,
        name: "Hauts fille",
        path: &["Enfants", "Filles", "Vêtements", "Hauts"],
        keywords: &["t-shirt", "pull", "sweat", "gilet", "chemise"],
        gender: Some(Gender::Enfant),
    },
    Category {
        id: 201,
        name: "Robes fille",
        path: &["Enfants", "Filles", "Vêtements", "Robes"],
        keywords: &["robe"],
        gender: Some(Gender::Enfant),
    },
    Category {
        id: 202,
        name: "Bas fille",
        path: &["Enfants", "Filles", "Vêtements", "Bas"],
        keywords: &["pantalon", "jean", "jupe", "short", "legging"],
        gender: Some(Gender::Enfant),
    },
    // Garçons
    Category {
        id: 210,
        name: "Hauts garçon",
        path: &["Enfants", "Garçons", "Vêtements", "Hauts"],
        keywords: &["t-shirt", "pull", "sweat", "gilet", "chemise"],
        gender: Some(Gender::Enfant),
    },
    Category {
        id: 211,
        name: "Bas garçon",
        path: &["Enfants", "Garçons", "Vêtements", "Bas"],
        keywords: &["pantalon", "jean", "short", "jogging"],
        gender: Some(Gender::Enfant),
    },
    // ==================== MAISON ====================
    Category {
        id: 300,
        name: "Décoration",
        path: &["Maison", "Décoration"],
        keywords: &[
            "déco",
            "deco",
            "décoration",
            "decoration",
            "cadre",
            "vase",
            "bougie",
            "coussin",
            "miroir",
            "tableau",
        ],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 301,
        name: "Vaisselle",
        path: &["Maison", "Cuisine et salle à manger", "Vaisselle"],
        keywords: &["assiette", "verre", "tasse", "mug", "bol", "vaisselle", "couverts"],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 302,
        name: "Linge de maison",
        path: &["Maison", "Linge de maison"],
        keywords: &[
            "drap",
            "housse",
            "couette",
            "oreiller",
            "serviette",
            "nappe",
            "rideau",
        ],
        gender: Some(Gender::Mixte),
    },
    // ==================== ÉLECTRONIQUE ====================
    Category {
        id: 400,
        name: "Smartphones",
        path: &["Électronique", "Téléphones et accessoires", "Smartphones"],
        keywords: &[
            "téléphone",
            "telephone",
            "smartphone",
            "iphone",
            "samsung",
            "huawei",
            "xiaomi",
        ],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 401,
        name: "Tablettes",
        path: &["Électronique", "Tablettes et liseuses"],
        keywords: &["tablette", "ipad", "kindle", "liseuse"],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 402,
        name: "Consoles de jeux",
        path: &["Électronique", "Consoles et jeux vidéo", "Consoles"],
        keywords: &[
            "console",
            "playstation",
            "xbox",
            "nintendo",
            "switch",
            "ps4",
            "ps5",
        ],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 403,
        name: "Jeux vidéo",
        path: &["Électronique", "Consoles et jeux vidéo", "Jeux"],
        keywords: &["jeu vidéo", "jeux vidéo", "jeu video", "jeux video"],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 404,
        name: "Écouteurs et casques",
        path: &["Électronique", "Audio", "Écouteurs et casques"],
        keywords: &["écouteur", "ecouteur", "casque", "airpods", "earbuds", "audio"],
        gender: Some(Gender::Mixte),
    },
    // ==================== BEAUTÉ ====================
    Category {
        id: 500,
        name: "Maquillage",
        path: &["Beauté", "Maquillage"],
        keywords: &[
            "maquillage",
            "rouge à lèvres",
            "mascara",
            "fond de teint",
            "eye-liner",
            "fard",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 501,
        name: "Parfums",
        path: &["Beauté", "Parfums"],
        keywords: &[
            "parfum",
            "eau de toilette",
            "eau de parfum",
            "cologne",
            "fragrance",
        ],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 502,
        name: "Soins",
        path: &["Beauté", "Soins du visage et du corps"],
        keywords: &["crème", "creme", "sérum", "serum", "soin", "lotion", "huile"],
        gender: Some(Gender::Mixte),
    },
    // ==================== SPORT ====================
    Category {
        id: 600,
        name: "Vêtements de sport femme",
        path: &["Sport", "Fitness et gym", "Vêtements de sport"],
        keywords: &[
            "legging sport",
            "brassière sport",
            "t-shirt sport",
            "short sport",
            "yoga",
            "fitness",
            "gym",
        ],
        gender: Some(Gender::Femme),
    },
    Category {
        id: 601,
        name: "Vêtements de sport homme",
        path: &["Sport", "Fitness et gym", "Vêtements de sport"],
        keywords: &[
            "short sport",
            "t-shirt sport",
            "débardeur sport",
            "jogging sport",
        ],
        gender: Some(Gender::Homme),
    },
    Category {
        id: 602,
        name: "Chaussures de sport",
        path: &["Sport", "Chaussures de sport"],
        keywords: &[
            "chaussure de sport",
            "running",
            "course",
            "trail",
            "football",
            "basket sport",
        ],
        gender: Some(Gender::Mixte),
    },
    Category {
        id: 603,
        name: "Équipement sportif",
        path: &["Sport", "Équipement sportif"],
        keywords: &[
            "haltère",
            "tapis",
            "corde à sauter",
            "bande élastique",
            "ballon",
            "raquette",
        ],
        gender: Some(Gender::Mixte),
    },
];
