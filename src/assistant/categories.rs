use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const CATEGORIES: [HealthCategory; 6] = [
    HealthCategory {
        id: "menstruation",
        name: "Menstruation",
        description: "Periods, cycle tracking, symptoms",
        icon: "🩸",
    },
    HealthCategory {
        id: "pregnancy",
        name: "Pregnancy",
        description: "Conception, pregnancy care, symptoms",
        icon: "🤱",
    },
    HealthCategory {
        id: "pcos",
        name: "PCOS",
        description: "Polycystic ovary syndrome",
        icon: "🫶",
    },
    HealthCategory {
        id: "birth_control",
        name: "Birth Control",
        description: "Contraceptives, family planning",
        icon: "💊",
    },
    HealthCategory {
        id: "first_time_sex",
        name: "First-time Sex",
        description: "Sexual health, first experiences",
        icon: "💕",
    },
    HealthCategory {
        id: "vaginal_health",
        name: "Vaginal Health",
        description: "Infections, hygiene, wellness",
        icon: "🌸",
    },
];
