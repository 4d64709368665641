//! Static fallback values substituted when the content API is unreachable.
//!
//! Fallbacks are shaped exactly like live data. Listings that change often
//! (banners, articles) fall back to empty; the subject tree, menu buttons,
//! and coaching centers fall back to the seed records below so the site
//! stays navigable while the API is down.

use super::{
    ArticlePage, Banner, Category, CoachingCenter, MenuButton, Subcategory, ACTIVE_FLAG,
};

/// Seed subject tree: (category id, name, subcategories as (id, name))
static SEED_TREE: &[(u64, &str, &[(u64, &str)])] = &[
    (
        1,
        "History",
        &[
            (101, "Ancient History"),
            (102, "Medieval History"),
            (103, "Modern History"),
            (104, "World History"),
        ],
    ),
    (
        2,
        "Geography",
        &[
            (201, "Physical Geography"),
            (202, "Human Geography"),
            (203, "Economic Geography"),
            (204, "World Geography"),
        ],
    ),
    (
        3,
        "Polity",
        &[
            (301, "Constitution"),
            (302, "Governance"),
            (303, "Judiciary"),
            (304, "Federalism"),
        ],
    ),
    (
        4,
        "Economy",
        &[
            (401, "Macro Economics"),
            (402, "Micro Economics"),
            (403, "Public Finance"),
            (404, "Economic Survey"),
        ],
    ),
    (
        5,
        "Environment",
        &[
            (501, "Ecology"),
            (502, "Climate Change"),
            (503, "Biodiversity"),
            (504, "Conservation"),
        ],
    ),
    (
        6,
        "Science & Technology",
        &[
            (601, "Space Technology"),
            (602, "Biotechnology"),
            (603, "Information Technology"),
            (604, "Defence Technology"),
        ],
    ),
    (
        7,
        "Current Affairs",
        &[
            (701, "National Affairs"),
            (702, "International Affairs"),
            (703, "Government Schemes"),
            (704, "Awards & Recognition"),
        ],
    ),
];

fn subcategory(id: u64, category_id: u64, name: &str) -> Subcategory {
    Subcategory {
        id,
        name: name.to_string(),
        category_id,
        is_active: ACTIVE_FLAG,
    }
}

/// Seed category tree with nested subcategories.
pub fn categories() -> Vec<Category> {
    SEED_TREE
        .iter()
        .map(|(id, name, subs)| Category {
            id: *id,
            name: name.to_string(),
            subcategories: subs
                .iter()
                .map(|(sub_id, sub_name)| subcategory(*sub_id, *id, sub_name))
                .collect(),
            is_active: ACTIVE_FLAG,
        })
        .collect()
}

/// Seed subcategories for one category, empty when the id is not in the tree.
pub fn subcategories(category_id: u64) -> Vec<Subcategory> {
    SEED_TREE
        .iter()
        .find(|(id, _, _)| *id == category_id)
        .map(|(id, _, subs)| {
            subs.iter()
                .map(|(sub_id, sub_name)| subcategory(*sub_id, *id, sub_name))
                .collect()
        })
        .unwrap_or_default()
}

/// Default quick-navigation buttons pointing into the seed tree.
pub fn menu_buttons() -> Vec<MenuButton> {
    let labels: [(u64, &str); 6] = [
        (7, "Current Affairs"),
        (1, "History & Culture"),
        (2, "Geography"),
        (3, "Polity & Governance"),
        (4, "Economy"),
        (6, "Science & Technology"),
    ];

    labels
        .iter()
        .enumerate()
        .map(|(idx, (category_id, label))| MenuButton {
            id: idx as u64 + 1,
            label: label.to_string(),
            link_url: Some(format!("/?category={}", category_id)),
            display_order: idx as u32 + 1,
            is_active: ACTIVE_FLAG,
        })
        .collect()
}

/// The five coaching centers shown in the footer of the brand's site.
pub fn coaching_centers() -> Vec<CoachingCenter> {
    let records: [(u64, &str, &str, &str); 5] = [
        (
            1,
            "Delhi",
            "56/3, Bada Bazar, Old Rajinder Nagar, New Delhi - 110060",
            "8279611595",
        ),
        (
            2,
            "Bengaluru",
            "80 Feet Rd, 2nd Block, Nagarbhavi 1st Stage, Chandra Layout, Bengaluru - 560040",
            "9611214771",
        ),
        (
            3,
            "Pune",
            "Limaye Wadi, Sadashiv Peth, Pune - 411030",
            "9205551486",
        ),
        (
            4,
            "Ahmedabad",
            "112A, Ratna Business Center, Ashram Road, Ahmedabad - 380009",
            "9925981994",
        ),
        (
            5,
            "Jammu",
            "48 C/C, Greenbelt Park, Gandhi Nagar, Jammu - 180004",
            "9205551481",
        ),
    ];

    records
        .iter()
        .map(|(id, city, address, phone)| CoachingCenter {
            id: *id,
            city: city.to_string(),
            address: address.to_string(),
            phone: Some(phone.to_string()),
            map_url: Some(format!(
                "https://maps.google.com/?q={}",
                urlencoding::encode(&format!("{}, {}", address, city))
            )),
            is_active: ACTIVE_FLAG,
        })
        .collect()
}

/// Banners fall back to empty; the hero degrades to the static tagline.
pub fn banners() -> Vec<Banner> {
    Vec::new()
}

/// Article listings fall back to an empty first page.
pub fn articles() -> ArticlePage {
    ArticlePage::default()
}
