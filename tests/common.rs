#![allow(dead_code)]

use std::fs;
use std::path::Path;

use crop_yield_preprocessor::config::Config;
use tempfile::TempDir;

pub const PESTICIDES_CSV: &str = "\
Domain,Area ,Element,Item,Year,Unit,Value
Pesticides Use,Albania,Use,Pesticides (total),1990,tonnes of active ingredients,121
Pesticides Use,Albania,Use,Pesticides (total),1991,tonnes of active ingredients,121
Pesticides Use,Algeria,Use,Pesticides (total),1990,tonnes of active ingredients,1828.92
";

// Leading space in the first label is deliberate
pub const RAINFALL_CSV: &str = " Area,Year,average_rain_fall_mm_per_year
Albania,1990,10
Albania,1991,20
Algeria,1990,..
";

pub const TEMPERATURE_CSV: &str = "\
year,country,avg_temp
1990,Albania,16.0
1991,Albania,18.0
1990,Angola,20.0
1990,Angola,99.0
1990,Zambia,bad
";

pub const YIELD_CSV: &str = "\
,Area,Item,Year,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp
0,Albania,Maize,1990,36613,1485.0,1,16.37
1,Albania,Maize,1991,29068,1485.0,2,15.36
2,Algeria,Maize,1990,24000,89.0,,17.0
3,Angola,Maize,1990,15000,1010.0,4,24.0
4,Zambia,Maize,1990,15000,1020.0,abc,21.5
";

/// Expected output for the fixtures above
pub const EXPECTED_CLEANED_CSV: &str = "\
Area,Item_x,Year,hg/ha_yield,average_rain_fall_mm_per_year,pesticides_tonnes,avg_temp,Domain,Element,Item_y,Unit,Unit.1,rainfall_mm,temperature
Albania,Maize,1990,36613,1485.0,1.0,16.37,Pesticides Use,Use,Pesticides (total),tonnes of active ingredients,121.0,10.0,16.0
Albania,Maize,1991,29068,1485.0,2.0,15.36,Pesticides Use,Use,Pesticides (total),tonnes of active ingredients,121.0,20.0,18.0
Algeria,Maize,1990,24000,89.0,2.0,17.0,Pesticides Use,Use,Pesticides (total),tonnes of active ingredients,1828.92,15.0,18.0
Angola,Maize,1990,15000,1010.0,4.0,24.0,,,,,,15.0,20.0
Zambia,Maize,1990,15000,1020.0,2.0,21.5,,,,,,15.0,18.0
";

pub fn write_file(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).expect("Failed to write fixture file");
}

/// Create a temp data directory holding all four source files
pub fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    write_file(dir.path(), "pesticides.csv", PESTICIDES_CSV);
    write_file(dir.path(), "rainfall.csv", RAINFALL_CSV);
    write_file(dir.path(), "temp.csv", TEMPERATURE_CSV);
    write_file(dir.path(), "yield_df.csv", YIELD_CSV);
    dir
}

pub fn config_for(dir: &TempDir) -> Config {
    Config::new(dir.path())
}
