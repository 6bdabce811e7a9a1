//! Default word list compiled into the binary
//!
//! A modest mixed-length list (3 to 8 letters) so the game plays out of the
//! box; pass `--wordlist <path>` for a bigger dictionary.

/// Built-in words, grouped by length for readability
pub const WORDS: &[&str] = &[
    // 3 letters
    "arm", "bed", "cat", "cup", "den", "dog", "ear", "fig", "fox", "gem", "hat", "hut", "ice",
    "ink", "jar", "jaw", "key", "kit", "lip", "log", "map", "mud", "net", "oak", "pit", "rug",
    "saw", "sun", "tin", "urn", "van", "wax", "yak", "zip",
    // 4 letters
    "acid", "best", "bird", "bolt", "carp", "dusk", "echo", "envy", "fish", "flux", "gold",
    "grim", "hand", "heal", "hush", "iron", "jump", "kite", "lamp", "lazy", "moon", "nest",
    "open", "pear", "quiz", "rain", "snow", "tide", "tree", "vine", "wolf", "yarn", "zero",
    // 5 letters
    "amber", "apple", "blink", "brave", "chord", "crane", "drift", "dwell", "eagle", "ember",
    "frost", "globe", "haunt", "irate", "jolly", "knack", "lemon", "mirth", "noble", "ocean",
    "prism", "quilt", "ridge", "slate", "tiger", "usher", "vivid", "wreck", "yield", "zesty",
    // 6 letters
    "bonnet", "branch", "candle", "copper", "dragon", "effort", "fallow", "garnet", "hollow",
    "insect", "jungle", "kernel", "lagoon", "marble", "nugget", "orchid", "pillar", "quiver",
    "rascal", "silver", "tunnel", "uproar", "velvet", "wander", "yonder", "zephyr",
    // 7 letters
    "admiral", "bandage", "caravan", "dolphin", "eclipse", "factory", "gallant", "harvest",
    "inkwell", "journey", "kingdom", "lantern", "machine", "nomadic", "outpost", "pensive",
    "quibble", "railway", "sapling", "terrace", "upgrade", "venture", "whistle",
    // 8 letters
    "absolute", "boundary", "calendar", "daughter", "elephant", "festival", "graceful",
    "hedgehog", "incident", "junction", "keystone", "laughter", "mountain", "notebook",
    "obstacle", "particle", "quagmire", "reindeer", "standard", "template", "umbrella",
    "vagabond", "workshop",
];
