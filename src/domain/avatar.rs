//! Deterministic avatar URLs
//!
//! Avatars are never fetched here; the URL alone is derived from profile attributes so
//! the same profile always renders the same picture.

use crate::domain::constants::avatar::{BASE_URL, STYLE};
use crate::domain::matching::QueryProfile;
use crate::domain::user::{Gender, UserRecord};

const BACKGROUND: &str = "backgroundColor=b6e3f4";
const HAIR_COLORS: &str =
    "hairColor=0e0e0e,6a4e35,a55728,c93305,cb6820,911f27,e8e8e8,b9b9b9,9a9a9a,697a96,4a5568,8d5524";
const ACCESSORIES: &str = "accessories=glasses,glasses02,glasses03,glasses04,glasses05";

fn style_url(seed: &str) -> String {
    format!("{BASE_URL}/{STYLE}/svg?seed={}", urlencoding::encode(seed))
}

/// Avatar for a submitted query profile, seeded by `gender-age-goal`
pub fn query_avatar_url(profile: &QueryProfile) -> String {
    style_url(&format!("{}-{}-{}", profile.gender, profile.age, profile.goal))
}

/// Avatar for a browsed record, with gender-specific hair and accessory options
pub fn record_avatar_url(record: &UserRecord) -> String {
    let seed = format!("{}-{}-{}", record.gender.label(), record.age, record.occupation);
    let (hair, accessories_probability) = match record.gender {
        Gender::Female => (hair_option("long", 20), 20),
        Gender::Male => (hair_option("short", 15), 30),
    };
    let options = [
        BACKGROUND.to_string(),
        hair,
        HAIR_COLORS.to_string(),
        format!("accessoriesProbability={accessories_probability}"),
        ACCESSORIES.to_string(),
    ];
    format!("{}&{}", style_url(&seed), options.join("&"))
}

fn hair_option(prefix: &str, variants: u8) -> String {
    let styles: Vec<String> = (1..=variants).map(|n| format!("{prefix}{n:02}")).collect();
    format!("hair={}", styles.join(","))
}
