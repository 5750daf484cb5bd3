// Domain layer: the numeral table, batch records and the converter port.

pub mod model;
pub mod ports;
