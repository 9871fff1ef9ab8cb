use findash_core::CompanyInfo;
use serde::Serialize;

/// Companies covered out of the box: IDX-listed large caps with their sector
/// classification. Callers may supply their own roster instead.
const DEFAULT_ROSTER: &[(&str, &str, &str)] = &[
    ("BBCA.JK", "Bank Central Asia Tbk", "Banking"),
    ("BMRI.JK", "Bank Mandiri (Persero) Tbk", "Banking"),
    ("BBRI.JK", "Bank Rakyat Indonesia (Persero) Tbk", "Banking"),
    ("BBNI.JK", "Bank Negara Indonesia (Persero) Tbk", "Banking"),
    ("TLKM.JK", "Telkom Indonesia (Persero) Tbk", "Telecommunications"),
    ("UNVR.JK", "Unilever Indonesia Tbk", "Consumer Goods"),
    ("ASII.JK", "Astra International Tbk", "Automotive"),
    ("INTP.JK", "Indocement Tunggal Prakarsa Tbk", "Cement"),
    ("SMGR.JK", "Semen Indonesia (Persero) Tbk", "Cement"),
    ("ICBP.JK", "Indofood CBP Sukses Makmur Tbk", "Food & Beverages"),
    ("INDF.JK", "Indofood Sukses Makmur Tbk", "Food & Beverages"),
    ("KLBF.JK", "Kalbe Farma Tbk", "Pharmaceuticals"),
    ("GGRM.JK", "Gudang Garam Tbk", "Tobacco"),
    ("HMSP.JK", "HM Sampoerna Tbk", "Tobacco"),
    ("PTBA.JK", "Bukit Asam (Persero) Tbk", "Mining"),
    ("PGAS.JK", "Perusahaan Gas Negara (Persero) Tbk", "Oil & Gas"),
    ("JSMR.JK", "Jasa Marga (Persero) Tbk", "Infrastructure"),
    ("ADRO.JK", "Adaro Energy Tbk", "Mining"),
    ("LPPF.JK", "Matahari Department Store Tbk", "Retail"),
    ("MAPI.JK", "Mitra Adiperkasa Tbk", "Retail"),
];

pub fn default_roster() -> Vec<CompanyInfo> {
    DEFAULT_ROSTER
        .iter()
        .map(|&(ticker, name, sector)| CompanyInfo {
            ticker: ticker.to_string(),
            name: name.to_string(),
            sector: sector.to_string(),
        })
        .collect()
}

/// Roster member as listed in a sector summary (sector is implied by the
/// grouping).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorMember {
    pub ticker: String,
    pub name: String,
}

/// One sector's slice of the roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectorSummary {
    pub name: String,
    pub companies: Vec<SectorMember>,
    pub total_companies: usize,
}

/// Groups a roster by sector, in first-seen order.
pub fn sectors_summary(roster: &[CompanyInfo]) -> Vec<SectorSummary> {
    let mut sectors: Vec<SectorSummary> = Vec::new();
    for company in roster {
        let member = SectorMember {
            ticker: company.ticker.clone(),
            name: company.name.clone(),
        };
        if let Some(summary) = sectors.iter_mut().find(|s| s.name == company.sector) {
            summary.companies.push(member);
            summary.total_companies += 1;
        } else {
            sectors.push(SectorSummary {
                name: company.sector.clone(),
                companies: vec![member],
                total_companies: 1,
            });
        }
    }
    sectors
}
