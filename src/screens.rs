//! The fixed screen-definition table and side-label lookup.
//!
//! Clause strings are Chartink scan-language payloads, passed through to the
//! upstream endpoint verbatim and never parsed or generated here.

/// A named screen query. Immutable, defined at compile time.
#[derive(Debug, Clone, Copy)]
pub struct ScreenDef {
    pub name: &'static str,
    pub clause: &'static str,
}

/// Table order here is the flatten order of the final output.
pub const SCREENS: &[ScreenDef] = &[
    ScreenDef {
        name: "buy",
        clause: "( {cash} ( [=1] 5 minute close >= [=1] 5 minute open * 1.005 and [=1] 5 minute volume > 100000 and [=1] 5 minute rsi( 14 ) > 70 ) )",
    },
    ScreenDef {
        name: "sell",
        clause: "( {cash} ( [=1] 5 minute volume > 100000 and [=2] 5 minute rsi( 14 ) < 35 and [=1] 5 minute close <= [=1] 5 minute open * 0.995 ) )",
    },
    ScreenDef {
        name: "advanceBuy",
        clause: "( {cash} ( [=1] 5 minute close >= [=1] 5 minute open * 1.005 and [=1] 5 minute volume > 100000 and [=1] 5 minute buyer initiated trades quantity > 50000 and [=1] 5 minute rsi( 14 ) > 70 ) )",
    },
    ScreenDef {
        name: "advanceSell",
        clause: "( {cash} ( [=1] 5 minute volume > 100000 and [=1] 5 minute seller initiated trades quantity > 50000 and [=1] 5 minute rsi( 14 ) < 35 and [=1] 5 minute close <= [=1] 5 minute open * 0.995 ) )",
    },
    ScreenDef {
        name: "volumeGainers",
        clause: "( {cash} ( latest volume > 100000 ) )",
    },
    ScreenDef {
        name: "topGainers",
        clause: "( {cash} ( latest close > 1 day ago close and latest close > 100 and latest volume > 100000 ) )",
    },
    ScreenDef {
        name: "topLosers",
        clause: "( {cash} ( latest close < 1 day ago close and latest close > 100 and latest volume > 100000 ) )",
    },
    ScreenDef {
        name: "niftyGainers",
        clause: "( {57960} ( latest close > 1 day ago close and latest close > 100 and latest volume > 100000 ) )",
    },
    ScreenDef {
        name: "niftyLosers",
        clause: "( {57960} ( latest close < 1 day ago close and latest close > 100 and latest volume > 100000 ) )",
    },
    ScreenDef {
        name: "fiftyTwoWeekHigh",
        clause: "( {cash} ( latest high = latest max( 260 , latest high ) ) )",
    },
    ScreenDef {
        name: "fiftyEmaSupport",
        clause: "( {cash} ( latest ema( close,50 ) >= latest low and( {cash} ( latest close >= latest ema( close,50 ) and latest volume > 100000 ) ) ) )",
    },
    ScreenDef {
        name: "vcpPattern",
        clause: "( {cash} ( weekly ema( close,13 ) > weekly ema( close,26 ) and weekly ema( close,26 ) > weekly sma( close,50 ) and weekly sma( close,40 ) > 5 weeks ago sma( close,40 ) and latest close >= weekly min( 50 , weekly low * 1.3 ) and latest close >= weekly max( 50 , weekly high * 0.75 ) and 20 days ago ema( close,13 ) > 20 weeks ago ema( close,26 ) and 5 weeks ago sma( close,40 ) > 10 weeks ago sma( close,40 ) and latest close > latest sma( close,50 ) and( weekly wma( close,8 ) - weekly sma( close,8 ) ) * 6 / 29 < 0.5 and latest close > 10 ) )",
    },
    ScreenDef {
        name: "zeroVolume",
        clause: "( {45603} ( latest close >= 1 and latest volume = 0 ) )",
    },
    ScreenDef {
        name: "nifty50CloseAbove20",
        clause: "( {33492} ( latest close > 20 ) )",
    },
    ScreenDef {
        name: "allCashCloseAbove20",
        clause: "( {cash} ( latest close > 20 ) )",
    },
];

/// Screens whose rows get a momentumStrength score.
pub const MOMENTUM_SCREENS: &[&str] = &["buy", "sell", "advanceBuy", "advanceSell"];

/// Screen name → display label. Names not listed use themselves verbatim.
const SIDE_LABELS: &[(&str, &str)] = &[
    ("niftyGainers", "gainerNifty500"),
    ("niftyLosers", "loserNifty500"),
    ("advanceBuy", "advanceBuy"),
    ("advanceSell", "advanceSell"),
    ("fiftyTwoWeekHigh", "fiftyTwoWeekHigh"),
    ("fiftyEmaSupport", "fiftyEmaSupport"),
    ("vcpPattern", "vcpPattern"),
    ("zeroVolume", "zeroVolume"),
    ("nifty50CloseAbove20", "nifty50CloseAbove20"),
    ("allCashCloseAbove20", "allCashCloseAbove20"),
];

pub fn side_label(name: &str) -> &str {
    SIDE_LABELS
        .iter()
        .find(|(screen, _)| *screen == name)
        .map(|(_, label)| *label)
        .unwrap_or(name)
}
