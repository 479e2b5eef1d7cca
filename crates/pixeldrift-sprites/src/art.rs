//! Built-in 8×8 text-art assets.
//!
//! `.` is transparent; letters are palette keys (see `palette` in lib.rs).

/// Names of every built-in asset, in load order.
pub const NAMES: [&str; 15] = [
    "crate", "heart", "star", "gear", "key", "potion", "sword", "shield", "coin", "skull", "bolt",
    "cherry", "ghost", "mushroom", "diamond",
];

/// Look up the text-art rows for a named asset.
pub(crate) fn rows(name: &str) -> Option<&'static [&'static str]> {
    let idx = NAMES.iter().position(|n| *n == name)?;
    Some(&ART[idx])
}

const ART: [[&str; 8]; 15] = [
    // crate
    [
        "NNNNNNNN",
        "NKNNNNKN",
        "NNKNNKNN",
        "NNNKKNNN",
        "NNNKKNNN",
        "NNKNNKNN",
        "NKNNNNKN",
        "NNNNNNNN",
    ],
    // heart
    [
        "........",
        ".RR..RR.",
        "RRRRRRRR",
        "RRRRRRRR",
        "RRRRRRRR",
        ".RRRRRR.",
        "..RRRR..",
        "...RR...",
    ],
    // star
    [
        "...YY...",
        "...YY...",
        "..YYYY..",
        "YYYYYYYY",
        ".YYYYYY.",
        "..YYYY..",
        ".YY..YY.",
        "YY....YY",
    ],
    // gear
    [
        "..E..E..",
        ".EEEEEE.",
        "EEEKKEEE",
        ".EKKKKE.",
        ".EKKKKE.",
        "EEEKKEEE",
        ".EEEEEE.",
        "..E..E..",
    ],
    // key
    [
        ".YYY....",
        "YY.YY...",
        "YY.YY...",
        ".YYY....",
        "..YY....",
        "..YY....",
        "..YYYY..",
        "..YYYY..",
    ],
    // potion
    [
        "...WW...",
        "...WW...",
        "..WWWW..",
        ".WMMMMW.",
        "WMMMMMMW",
        "WMMMMMMW",
        "WMMMMMMW",
        ".WWWWWW.",
    ],
    // sword
    [
        "......WW",
        ".....WW.",
        "....WW..",
        "...WW...",
        "NN.WW...",
        ".NWW....",
        ".NNN....",
        "N..N....",
    ],
    // shield
    [
        "BBBBBBBB",
        "BWWBBWWB",
        "BWWBBWWB",
        "BBBBBBBB",
        "BBWWWWBB",
        ".BBWWBB.",
        "..BBBB..",
        "...BB...",
    ],
    // coin
    [
        "..YYYY..",
        ".YYYYYY.",
        "YYOOOOYY",
        "YYOYYOYY",
        "YYOYYOYY",
        "YYOOOOYY",
        ".YYYYYY.",
        "..YYYY..",
    ],
    // skull
    [
        "..WWWW..",
        ".WWWWWW.",
        "WWWWWWWW",
        "WKKWWKKW",
        "WWWWWWWW",
        ".WWKKWW.",
        ".WWWWWW.",
        ".W.WW.W.",
    ],
    // bolt
    [
        "....YYYY",
        "...YYY..",
        "..YYY...",
        ".YYYYYY.",
        "...YYY..",
        "..YYY...",
        ".YYY....",
        "YY......",
    ],
    // cherry
    [
        "....GG..",
        "...GG...",
        "..GG....",
        ".GGG....",
        "RR.GG...",
        "RRRR.RR.",
        "RRRR.RRR",
        ".RR..RR.",
    ],
    // ghost
    [
        "..CCCC..",
        ".CCCCCC.",
        "CCKCCKCC",
        "CCKCCKCC",
        "CCCCCCCC",
        "CCCCCCCC",
        "CCCCCCCC",
        "C.CC.CC.",
    ],
    // mushroom
    [
        "..RRRR..",
        ".RRWWRR.",
        "RRWWWWRR",
        "RRRRRRRR",
        "..WWWW..",
        "..WWWW..",
        "..WWWW..",
        "..WWWW..",
    ],
    // diamond
    [
        "..CCCC..",
        ".CWCCCC.",
        "CWCCCCCC",
        "CCCCCCCC",
        ".CCCCCC.",
        "..CCCC..",
        "...CC...",
        "........",
    ],
];
