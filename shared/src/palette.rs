use std::fmt;
use std::str::FromStr;

use crate::colors::{Rgb, linear_gradient_css};

/// Number of color classes in every palette.
pub const STOPS: usize = 9;

/// Sequential ColorBrewer schemes offered by the palette selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    #[default]
    Blues,
    Greens,
    Reds,
    Purples,
    Oranges,
    Greys,
    BuGn,
    BuPu,
    GnBu,
    OrRd,
    PuBuGn,
    PuBu,
    PuRd,
    RdPu,
    YlGnBu,
    YlGn,
    YlOrBr,
    YlOrRd,
}

const fn rgb(v: u32) -> Rgb {
    Rgb::new((v >> 16) as u8, (v >> 8) as u8, v as u8)
}

const BLUES: [Rgb; STOPS] = [
    rgb(0xf7fbff), rgb(0xdeebf7), rgb(0xc6dbef), rgb(0x9ecae1), rgb(0x6baed6),
    rgb(0x4292c6), rgb(0x2171b5), rgb(0x08519c), rgb(0x08306b),
];
const GREENS: [Rgb; STOPS] = [
    rgb(0xf7fcf5), rgb(0xe5f5e0), rgb(0xc7e9c0), rgb(0xa1d99b), rgb(0x74c476),
    rgb(0x41ab5d), rgb(0x238b45), rgb(0x006d2c), rgb(0x00441b),
];
const REDS: [Rgb; STOPS] = [
    rgb(0xfff5f0), rgb(0xfee0d2), rgb(0xfcbba1), rgb(0xfc9272), rgb(0xfb6a4a),
    rgb(0xef3b2c), rgb(0xcb181d), rgb(0xa50f15), rgb(0x67000d),
];
const PURPLES: [Rgb; STOPS] = [
    rgb(0xfcfbfd), rgb(0xefedf5), rgb(0xdadaeb), rgb(0xbcbddc), rgb(0x9e9ac8),
    rgb(0x807dba), rgb(0x6a51a3), rgb(0x54278f), rgb(0x3f007d),
];
const ORANGES: [Rgb; STOPS] = [
    rgb(0xfff5eb), rgb(0xfee6ce), rgb(0xfdd0a2), rgb(0xfdae6b), rgb(0xfd8d3c),
    rgb(0xf16913), rgb(0xd94801), rgb(0xa63603), rgb(0x7f2704),
];
const GREYS: [Rgb; STOPS] = [
    rgb(0xffffff), rgb(0xf0f0f0), rgb(0xd9d9d9), rgb(0xbdbdbd), rgb(0x969696),
    rgb(0x737373), rgb(0x525252), rgb(0x252525), rgb(0x000000),
];
const BU_GN: [Rgb; STOPS] = [
    rgb(0xf7fcfd), rgb(0xe5f5f9), rgb(0xccece6), rgb(0x99d8c9), rgb(0x66c2a4),
    rgb(0x41ae76), rgb(0x238b45), rgb(0x006d2c), rgb(0x00441b),
];
const BU_PU: [Rgb; STOPS] = [
    rgb(0xf7fcfd), rgb(0xe0ecf4), rgb(0xbfd3e6), rgb(0x9ebcda), rgb(0x8c96c6),
    rgb(0x8c6bb1), rgb(0x88419d), rgb(0x810f7c), rgb(0x4d004b),
];
const GN_BU: [Rgb; STOPS] = [
    rgb(0xf7fcf0), rgb(0xe0f3db), rgb(0xccebc5), rgb(0xa8ddb5), rgb(0x7bccc4),
    rgb(0x4eb3d3), rgb(0x2b8cbe), rgb(0x0868ac), rgb(0x084081),
];
const OR_RD: [Rgb; STOPS] = [
    rgb(0xfff7ec), rgb(0xfee8c8), rgb(0xfdd49e), rgb(0xfdbb84), rgb(0xfc8d59),
    rgb(0xef6548), rgb(0xd7301f), rgb(0xb30000), rgb(0x7f0000),
];
const PU_BU_GN: [Rgb; STOPS] = [
    rgb(0xfff7fb), rgb(0xece2f0), rgb(0xd0d1e6), rgb(0xa6bddb), rgb(0x67a9cf),
    rgb(0x3690c0), rgb(0x02818a), rgb(0x016c59), rgb(0x014636),
];
const PU_BU: [Rgb; STOPS] = [
    rgb(0xfff7fb), rgb(0xece7f2), rgb(0xd0d1e6), rgb(0xa6bddb), rgb(0x74a9cf),
    rgb(0x3690c0), rgb(0x0570b0), rgb(0x045a8d), rgb(0x023858),
];
const PU_RD: [Rgb; STOPS] = [
    rgb(0xf7f4f9), rgb(0xe7e1ef), rgb(0xd4b9da), rgb(0xc994c7), rgb(0xdf65b0),
    rgb(0xe7298a), rgb(0xce1256), rgb(0x980043), rgb(0x67001f),
];
const RD_PU: [Rgb; STOPS] = [
    rgb(0xfff7f3), rgb(0xfde0dd), rgb(0xfcc5c0), rgb(0xfa9fb5), rgb(0xf768a1),
    rgb(0xdd3497), rgb(0xae017e), rgb(0x7a0177), rgb(0x49006a),
];
const YL_GN_BU: [Rgb; STOPS] = [
    rgb(0xffffd9), rgb(0xedf8b1), rgb(0xc7e9b4), rgb(0x7fcdbb), rgb(0x41b6c4),
    rgb(0x1d91c0), rgb(0x225ea8), rgb(0x253494), rgb(0x081d58),
];
const YL_GN: [Rgb; STOPS] = [
    rgb(0xffffe5), rgb(0xf7fcb9), rgb(0xd9f0a3), rgb(0xaddd8e), rgb(0x78c679),
    rgb(0x41ab5d), rgb(0x238443), rgb(0x006837), rgb(0x004529),
];
const YL_OR_BR: [Rgb; STOPS] = [
    rgb(0xffffe5), rgb(0xfff7bc), rgb(0xfee391), rgb(0xfec44f), rgb(0xfe9929),
    rgb(0xec7014), rgb(0xcc4c02), rgb(0x993404), rgb(0x662506),
];
const YL_OR_RD: [Rgb; STOPS] = [
    rgb(0xffffcc), rgb(0xffeda0), rgb(0xfed976), rgb(0xfeb24c), rgb(0xfd8d3c),
    rgb(0xfc4e2a), rgb(0xe31a1c), rgb(0xbd0026), rgb(0x800026),
];

impl Palette {
    /// Selector order.
    pub const ALL: [Palette; 18] = [
        Palette::Blues,
        Palette::Greens,
        Palette::Reds,
        Palette::Purples,
        Palette::Oranges,
        Palette::Greys,
        Palette::BuGn,
        Palette::BuPu,
        Palette::GnBu,
        Palette::OrRd,
        Palette::PuBuGn,
        Palette::PuBu,
        Palette::PuRd,
        Palette::RdPu,
        Palette::YlGnBu,
        Palette::YlGn,
        Palette::YlOrBr,
        Palette::YlOrRd,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Palette::Blues => "schemeBlues",
            Palette::Greens => "schemeGreens",
            Palette::Reds => "schemeReds",
            Palette::Purples => "schemePurples",
            Palette::Oranges => "schemeOranges",
            Palette::Greys => "schemeGreys",
            Palette::BuGn => "schemeBuGn",
            Palette::BuPu => "schemeBuPu",
            Palette::GnBu => "schemeGnBu",
            Palette::OrRd => "schemeOrRd",
            Palette::PuBuGn => "schemePuBuGn",
            Palette::PuBu => "schemePuBu",
            Palette::PuRd => "schemePuRd",
            Palette::RdPu => "schemeRdPu",
            Palette::YlGnBu => "schemeYlGnBu",
            Palette::YlGn => "schemeYlGn",
            Palette::YlOrBr => "schemeYlOrBr",
            Palette::YlOrRd => "schemeYlOrRd",
        }
    }

    /// The nine stops, lightest first.
    pub const fn stops(self) -> &'static [Rgb; STOPS] {
        match self {
            Palette::Blues => &BLUES,
            Palette::Greens => &GREENS,
            Palette::Reds => &REDS,
            Palette::Purples => &PURPLES,
            Palette::Oranges => &ORANGES,
            Palette::Greys => &GREYS,
            Palette::BuGn => &BU_GN,
            Palette::BuPu => &BU_PU,
            Palette::GnBu => &GN_BU,
            Palette::OrRd => &OR_RD,
            Palette::PuBuGn => &PU_BU_GN,
            Palette::PuBu => &PU_BU,
            Palette::PuRd => &PU_RD,
            Palette::RdPu => &RD_PU,
            Palette::YlGnBu => &YL_GN_BU,
            Palette::YlGn => &YL_GN,
            Palette::YlOrBr => &YL_OR_BR,
            Palette::YlOrRd => &YL_OR_RD,
        }
    }

    pub fn gradient_css(self) -> String {
        linear_gradient_css(self.stops())
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name.trim())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown palette: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::{Palette, STOPS};
    use crate::colors::Rgb;

    #[test]
    fn offers_eighteen_distinct_palettes() {
        let mut names: Vec<_> = Palette::ALL.iter().map(|p| p.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
    }

    #[test]
    fn default_is_blues() {
        assert_eq!(Palette::default(), Palette::Blues);
        assert_eq!(Palette::default().name(), "schemeBlues");
    }

    #[test]
    fn names_round_trip_through_from_name() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_name(palette.name()), Some(palette));
        }
        assert_eq!(Palette::from_name("schemeViridis"), None);
        assert!("nope".parse::<Palette>().is_err());
    }

    #[test]
    fn blues_endpoints() {
        let stops = Palette::Blues.stops();
        assert_eq!(stops.len(), STOPS);
        assert_eq!(stops[0], Rgb::new(0xf7, 0xfb, 0xff));
        assert_eq!(stops[8], Rgb::new(0x08, 0x30, 0x6b));
    }

    #[test]
    fn every_palette_runs_light_to_dark() {
        for palette in Palette::ALL {
            let stops = palette.stops();
            assert!(
                stops[0].luminance() > stops[STOPS - 1].luminance(),
                "{palette} should start lighter than it ends"
            );
        }
    }

    #[test]
    fn gradient_starts_with_lightest_stop() {
        let css = Palette::Reds.gradient_css();
        assert!(css.starts_with("linear-gradient(to right, #fff5f0,"));
        assert!(css.ends_with("#67000d)"));
    }
}
