use super::tree::{Constituency, County, RegionTree};

type CountyEntry = (&'static str, &'static [(&'static str, &'static [&'static str])]);

const KENYA_SAMPLE: &[CountyEntry] = &[
    (
        "Nairobi",
        &[
            (
                "Westlands",
                &["Parklands", "Highridge", "Karura", "Kangemi", "Mountain View"],
            ),
            (
                "Dagoretti North",
                &["Kilimani", "Kawangware", "Gatina", "Kileleshwa", "Kabiro"],
            ),
            (
                "Starehe",
                &["Nairobi Central", "Ngara", "Ziwani", "Landimawe", "Nairobi South"],
            ),
        ],
    ),
    (
        "Kiambu",
        &[
            ("Kiambaa", &["Karuri", "Ndenderu", "Muchatha", "Cianda", "Kihara"]),
            ("Kikuyu", &["Kikuyu", "Kinoo", "Nachu", "Sigona", "Karai"]),
        ],
    ),
    (
        "Mombasa",
        &[
            ("Mvita", &["Mji Wa Kale", "Tudor", "Tononoka", "Shimanzi", "Makadara"]),
            (
                "Nyali",
                &["Frere Town", "Ziwa La Ng'ombe", "Mkomani", "Kongowea", "Kadzandani"],
            ),
        ],
    ),
];

impl RegionTree {
    /// Built-in Nairobi / Kiambu / Mombasa dataset used when no tree file is supplied.
    pub fn kenya_sample() -> Self {
        let counties = KENYA_SAMPLE
            .iter()
            .map(|(county, constituencies)| County {
                name: (*county).to_string(),
                constituencies: constituencies
                    .iter()
                    .map(|(constituency, wards)| Constituency {
                        name: (*constituency).to_string(),
                        wards: wards.iter().map(|ward| (*ward).to_string()).collect(),
                    })
                    .collect(),
            })
            .collect();

        Self::from_trusted(counties)
    }
}
