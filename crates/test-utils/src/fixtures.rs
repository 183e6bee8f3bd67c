//! Common test fixtures for poverty map tests.

/// Lane County, Oregon as a one-degree box, in boundary CSV layout.
pub const LANE_OR_ROW: &str = "Lane,OR,-123.0,44.0,-122.0,44.0,-122.0,45.0,-123.0,45.0";

/// Corner pairs of [`LANE_OR_ROW`].
pub const LANE_OR_PAIRS: [(f64, f64); 4] =
    [(-123.0, 44.0), (-122.0, 44.0), (-122.0, 45.0), (-123.0, 45.0)];

/// Two adjacent counties in one state.
pub const TWO_COUNTY_BOUNDARIES: &str = "\
Lane,OR,-123.0,44.0,-122.0,44.0,-122.0,45.0,-123.0,45.0
Linn,OR,-122.0,44.0,-121.0,44.0,-121.0,45.0,-122.0,45.0
";

/// A Census SAIPE response covering the counties above plus an excluded state.
pub const SAIPE_RESPONSE: &str = r#"[
  ["NAME","STABREV","COUNTY","SAEPOVRTALL_PT","time","state","county"],
  ["Lane County","OR","039","5.0","2015","41","039"],
  ["Linn County","OR","043","25.0","2015","41","043"],
  ["Anchorage Municipality","AK","020","8.1","2015","02","020"],
  ["St. Louis city","MO","510","27.4","2015","29","510"]
]"#;

/// Excerpt of a national crime-rate table. The leading title row and the
/// trailing footnote are skipped by the reader.
pub const CRIME_RATES_CSV: &str = "\
Year,Population,Violent crime rate,Murder,Rape,Robbery,Assault,Property crime,Property crime rate
1999,272690813,523.0,5.7,32.8,150.1,334.3,11634378,4266.5
2000,281421906,506.5,5.5,32.0,145.0,324.0,10182584,3618.3
2001,285317559,504.5,5.6,31.8,148.5,318.6,10437189,3658.1
2002,287973924,494.4,5.6,33.1,146.1,309.5,10455277,3630.6
Note: rates are per 100000 inhabitants
";
