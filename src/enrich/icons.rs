//! Fixed bot id -> CDN icon URL table.
//!
//! Icon art lives on an external content-delivery host and is keyed by bot
//! id. The table is compiled in rather than configured: the set of bots
//! changes with game patches, at the same cadence as the catalogs themselves.

const CDN_BASE: &str = "https://cdn.metaforge.app/arc-raiders/icons";

/// Icon URL for a bot id, or `None` for ids without uploaded art.
pub fn bot_icon_url(bot_id: &str) -> Option<String> {
    let file = match bot_id {
        "the_queen" => "queen.webp",
        "fireball" => "fireball.webp",
        "hornet" => "hornet.webp",
        "wasp" => "wasp.webp",
        "tick" => "tick.webp",
        "leaper" => "bison.webp",
        "pop" => "pop.webp",
        "rocketeer" => "rocketeer.webp",
        "bastion" => "bastion.webp",
        "bombardier" => "bombardier.webp",
        "sentinel" => "sentinel.webp",
        "snitch" => "snitch.webp",
        "arc_surveyor" => "rollbot.webp",
        "shredder" => "shredder.webp",
        "matriarch" => "matriarch.webp",
        "turret" => "turret.webp",
        "spotter" => "snitch.webp",
        _ => return None,
    };
    Some(format!("{}/{}", CDN_BASE, file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_bot_resolves() {
        assert_eq!(
            bot_icon_url("wasp").as_deref(),
            Some("https://cdn.metaforge.app/arc-raiders/icons/wasp.webp")
        );
    }

    #[test]
    fn leaper_uses_bison_art() {
        assert_eq!(
            bot_icon_url("leaper").as_deref(),
            Some("https://cdn.metaforge.app/arc-raiders/icons/bison.webp")
        );
    }

    #[test]
    fn unknown_bot_has_no_icon() {
        assert_eq!(bot_icon_url("unmapped_bot"), None);
    }
}
