/// Community resource tags served by the `/tag` command.
///
/// Kept sorted by name; `find` is case-insensitive so autocomplete and
/// prefix-command users can be sloppy about capitalization.
pub const TAGS: &[(&str, &str)] = &[
    (
        "Bastion Route Spreadsheet",
        "https://docs.google.com/spreadsheets/d/1qLgp5uhMOKuerNZaec1dpoECpJI0-6YhztMqa_wZ8W0/edit?usp=sharing",
    ),
    ("Blaze Fight", "https://youtu.be/dUMclLehKXE"),
    ("Bridge", "https://youtu.be/uvvhKX_KnT8"),
    ("Cobble Skip", "https://youtu.be/HLrsRaij1x8"),
    ("Dynamic RD", "https://youtu.be/qfwyFWTY3ds"),
    ("Housing", "https://youtu.be/B2SLviws-3c"),
    (
        "Kuee Housing",
        "https://www.twitch.tv/pncakespoon/clip/CovertShyTruffleHumbleLife-GbXo9QqoNykzFNLI",
    ),
    (
        "Language Guide",
        "https://docs.google.com/document/d/1jSeciLoEgSwWWCdNk0dKignzxJskxJ5_zeCQmcdGmTg/edit?usp=sharing",
    ),
    ("Lauf Crafting", "https://youtu.be/OHleXZuhYng"),
    (
        "Lava Placement",
        "https://cdn.discordapp.com/attachments/751512715872436416/1005946160386687108/LavaPlacememt.png",
    ),
    ("Manhunt Housing", "https://youtu.be/A2tiwLB3DlY"),
    ("Mapless", "https://youtu.be/ujZJw95h0nk"),
    (
        "Ninjabrain Bot",
        "Bot: https://github.com/Ninjabrain1/Ninjabrain-Bot/releases/\nTutorial: https://youtu.be/Rx8i7e5lu7g",
    ),
    (
        "Pig Punch",
        "When you break a chest/gold block, piglins who are on tier 1 **don't** upgrade to tier 2. \
         However, when you punch a piglin, piglins **do** upgrade to tier 2, even if they're on tier 1. \
         The significance of this is, that piglins on tier 1 lose interest in you as soon as they lose \
         LOS, so you want them on tier 2 aggro. Use cases for this are: Manhunt, where you're aggroing \
         piglins without armour, bridge manhunt, stables manhunt, treasure bridge, etc. Punching a pig \
         is not beneficial in crookst boomer or when you are wearing gold armour.",
    ),
    (
        "Preemptive Navigation",
        "Video: https://youtu.be/2dWq2wXy43M\nDocument: https://docs.google.com/document/d/1NEJ_BaQOqyDlt-h2GiUg4zXlqBHv8YfMVdGpQhDLD8U/edit?usp=sharing",
    ),
    ("Rawalle", "https://github.com/joe-ldp/Rawalle/releases/"),
    ("Reset Tracker", "https://github.com/Specnr/ResetTracker"),
    (
        "Right Shoulder Auto Funnel",
        "https://cdn.discordapp.com/attachments/751512715872436416/1006313251874820257/rightShoulderAutoFunnel.png",
    ),
    (
        "Sub Pixel",
        "Left wide: -0.01\nMiddle wide: +0.01\nRight wide: Do nothing\nhttps://cdn.discordapp.com/attachments/751512715872436416/1077348478654611486/image.png",
    ),
    ("Treasure", "https://youtu.be/HGcDSFKHOtw"),
    (
        "Vietnamese",
        "Guide: https://docs.google.com/document/d/1el7XoX9-wv1boIQ8haIO6XYSoAkEQoh0X1Rd8_PcN70/edit\n\
         Keyboard Doc: https://docs.google.com/document/d/1V2Uk4wDZknr6U9KbYJEc0JRYO7OWmhtmNIK0swTzXxs/edit\n\
         Resource Pack: https://drive.google.com/file/d/1NXiqmJ40-Oi3LcLQgc8LNlgGhr0TrRG4/view",
    ),
    (
        "Wall",
        "Rawalle: https://github.com/joe-ldp/Rawalle/releases/\nSpecnr's wall: https://github.com/Specnr/MultiResetWall/releases/",
    ),
    ("Wood Light", "https://youtu.be/QFNvgd32TYY"),
    (
        "Zero Cycle",
        "Video: https://youtu.be/YTVctKuUWbI\nDocument: https://docs.google.com/document/d/1Umtj4jo69FnHz68cgp9TCrfDS-14Ummhi6ZDEXg4XGY/view",
    ),
];

/// Resolves a tag by name, ignoring case.
pub fn find(name: &str) -> Option<&'static str> {
    TAGS.iter()
        .find(|(tag, _)| tag.eq_ignore_ascii_case(name))
        .map(|(_, content)| *content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_tag_ignoring_case() {
        assert_eq!(find("Mapless"), Some("https://youtu.be/ujZJw95h0nk"));
        assert_eq!(find("mapless"), Some("https://youtu.be/ujZJw95h0nk"));
        assert_eq!(find("MAPLESS"), Some("https://youtu.be/ujZJw95h0nk"));
    }

    #[test]
    fn unknown_tag_is_none() {
        assert_eq!(find("definitely not a tag"), None);
    }

    #[test]
    fn table_is_sorted_and_distinct() {
        for pair in TAGS.windows(2) {
            assert!(
                pair[0].0.to_ascii_lowercase() < pair[1].0.to_ascii_lowercase(),
                "{} should sort before {}",
                pair[0].0,
                pair[1].0
            );
        }
    }
}
