//! Static fixed-income record tables.
//!
//! Might be fetched from an api at a later point in the future.

use serde_json::Map;

use super::{Instrument, InstrumentType, Order};

pub fn fixed_income_instruments() -> Vec<Instrument> {
    vec![
        instrument(
            "XS1782803503",
            "SHBASS",
            "EUR",
            "Svenska Handelsbanken AB",
            "NHBDILHZTYCNBV5UYZ31",
            "Major Banks",
        ),
        instrument(
            "XS1794344827",
            "DNBNO",
            "EUR",
            "DNB Bank ASA",
            "549300GKFG0RYRRQ1414",
            "Major Banks",
        ),
        instrument(
            "XS2250008245",
            "MS",
            "EUR",
            "Morgan Stanley",
            "IGJSJL3JD5P30I6NJZ34",
            "Investment Banks/Brokers",
        ),
        instrument(
            "XS2524143554",
            "RABOBK",
            "EUR",
            "Cooperatieve Rabobank UA",
            "DG3RU1DBUFHT4ZF9WN62",
            "Regional Banks",
        ),
        instrument(
            "FR001400E797",
            "BPCEGP",
            "EUR",
            "BPCE SA",
            "9695005MSX1OYEMGDF46",
            "Regional Banks",
        ),
        instrument(
            "XS2432530637",
            "SANSCF",
            "USD",
            "Santander Consumer Finance SA",
            "5493000LM0MZ4JPMGM90",
            "Finance/Rental/Leasing",
        ),
        instrument(
            "DE000BHY0SP0",
            "BHH",
            "USD",
            "Berlin Hyp AG",
            "529900C4RSSBWXBSY931",
            "Finance/Rental/Leasing",
        ),
        instrument(
            "US172967LP48",
            "C",
            "USD",
            "Citigroup Inc.",
            "6SHGI4ZSSLCXXQSBB395",
            "Major Banks",
        ),
        instrument(
            "ES0413900608",
            "Santan",
            "EUR",
            "Banco Santander, S.A.",
            "5493006QMFDDMYWIAM13",
            "Major Banks",
        ),
        instrument(
            "ES0413900608",
            "HVB",
            "EUR",
            "UniCredit Bank AG",
            "2ZCNRR8UK83OBTEK2170",
            "Major Banks",
        ),
        instrument(
            "XS1796209010",
            "GS",
            "USD",
            "Goldman Sachs Group, Inc.",
            "784F5XWPLTWKTBV3E584",
            "Major Banks",
        ),
    ]
}

pub fn fixed_income_orders() -> Vec<Order> {
    [
        "1026", "2787", "3223", "4409", "4770", "7898", "1672", "2451", "3327", "3564", "9876",
    ]
    .into_iter()
    .map(|order_id| Order {
        order_id: order_id.to_string(),
        extra: Map::new(),
    })
    .collect()
}

fn instrument(
    isin: &str,
    ticker: &str,
    currency: &str,
    description: &str,
    lei: &str,
    industry: &str,
) -> Instrument {
    Instrument {
        isin: isin.to_string(),
        description: Some(description.to_string()),
        ticker: ticker.to_string(),
        lei: lei.to_string(),
        industry: industry.to_string(),
        currency: Some(currency.to_string()),
        instrument_type: InstrumentType::FixedIncome,
        bbg_exchange: None,
        extra: Map::new(),
    }
}
