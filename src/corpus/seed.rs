//! Built-in dataset used when no dataset file is available.

use super::CorpusRecord;

pub fn default_records() -> Vec<CorpusRecord> {
    vec![
        CorpusRecord::new(
            "What is a normal menstrual cycle length?",
            "A normal menstrual cycle typically ranges from 21 to 35 days, with an average of 28 days. The menstrual period itself usually lasts 3-7 days. Cycles can vary from month to month and may change throughout your life due to factors like stress, weight changes, hormonal fluctuations, or underlying health conditions.",
            "menstruation",
            &["periods", "cycle", "normal", "duration"],
            "gynecological_guidelines",
        ),
        CorpusRecord::new(
            "What are the early signs of pregnancy?",
            "Early pregnancy signs include missed periods, nausea (morning sickness), breast tenderness and swelling, fatigue, frequent urination, food aversions or cravings, mood changes, light spotting (implantation bleeding), and elevated basal body temperature. However, these symptoms can vary greatly between individuals.",
            "pregnancy",
            &["pregnancy", "symptoms", "early signs", "conception"],
            "obstetric_care_guidelines",
        ),
        CorpusRecord::new(
            "What is PCOS and what are its symptoms?",
            "PCOS (Polycystic Ovary Syndrome) is a hormonal disorder affecting women of reproductive age. Common symptoms include irregular periods or no periods, excess androgen levels causing acne and hirsutism (excessive hair growth), polycystic ovaries visible on ultrasound, weight gain or difficulty losing weight, insulin resistance, and fertility issues.",
            "pcos",
            &["PCOS", "hormonal", "symptoms", "ovaries", "androgens"],
            "endocrinology_textbook",
        ),
        CorpusRecord::new(
            "What birth control options are available?",
            "Birth control options include hormonal methods (birth control pills, patches, rings, injections), barrier methods (condoms, diaphragms, cervical caps), intrauterine devices (hormonal and copper IUDs), implants, emergency contraception, and permanent methods. Each has different effectiveness rates, side effects, and considerations.",
            "birth_control",
            &["contraception", "birth control", "family planning"],
            "contraceptive_guidelines",
        ),
        CorpusRecord::new(
            "What should I expect during my first gynecological exam?",
            "Your first gynecological exam typically includes discussing your medical and sexual history, a physical exam, and possibly a pelvic exam depending on your age and symptoms. The doctor will explain each step, and you can ask questions or request to stop at any time. It's normal to feel nervous.",
            "first_time_sex",
            &["gynecological exam", "first time", "what to expect"],
            "patient_care_protocols",
        ),
        CorpusRecord::new(
            "How can I maintain good vaginal health?",
            "Maintain vaginal health by practicing good hygiene (gentle washing with water), wearing breathable cotton underwear, avoiding douches and harsh soaps, staying hydrated, eating a balanced diet with probiotics, practicing safe sex, and changing tampons/pads regularly.",
            "vaginal_health",
            &["hygiene", "vaginal health", "prevention"],
            "gynecological_care_manual",
        ),
        CorpusRecord::new(
            "When should I be concerned about irregular periods?",
            "Consult a healthcare provider if you experience periods lasting longer than 7 days, bleeding between periods, periods occurring more frequently than every 21 days or less frequently than every 35 days, extremely heavy bleeding, severe cramping, or if you haven't had a period for 3+ months.",
            "menstruation",
            &["irregular periods", "heavy bleeding", "concerning symptoms"],
            "menstrual_disorders_guide",
        ),
        CorpusRecord::new(
            "How do I know if I have a yeast infection?",
            "Yeast infection symptoms include itching and burning in the vaginal area, thick white discharge that looks like cottage cheese, pain during urination or sex, and vulvar swelling. These infections are common and treatable with over-the-counter or prescription antifungal medications.",
            "vaginal_health",
            &["yeast infection", "symptoms", "treatment"],
            "gynecological_care_manual",
        ),
    ]
}
