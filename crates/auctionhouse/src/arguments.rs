use {
    anyhow::Context,
    std::{fmt, net::SocketAddr, path::PathBuf, str::FromStr},
};

/// Default franchise seed: the ten IPL-style franchises at 100 Cr each.
pub const DEFAULT_FRANCHISES: &[(&str, f64)] = &[
    ("CSK", 100.),
    ("MI", 100.),
    ("RCB", 100.),
    ("KKR", 100.),
    ("SRH", 100.),
    ("RR", 100.),
    ("DC", 100.),
    ("PBKS", 100.),
    ("GT", 100.),
    ("LSG", 100.),
];

#[derive(clap::Parser)]
pub struct Arguments {
    #[clap(long, env, default_value = "0.0.0.0:8080")]
    pub bind_address: SocketAddr,

    /// Shared secret that grants administrator authority when sent in the
    /// `x-admin-secret` request header.
    #[clap(long, env = "ADMIN_SECRET", hide_env_values = true)]
    pub admin_secret: String,

    /// Franchise seed list as repeated `NAME=BUDGET` pairs with the budget
    /// in crore. Defaults to the ten IPL franchises at 100 Cr.
    #[clap(long = "franchise", env = "FRANCHISES", use_value_delimiter = true)]
    pub franchises: Vec<FranchiseSeed>,

    /// TOML file with `[[franchise]]` entries (`name`, `budget`). Takes
    /// precedence over `--franchise`.
    #[clap(long, env)]
    pub franchise_file: Option<PathBuf>,

    /// Roster CSV loaded into the catalog at startup. The same format is
    /// accepted at runtime via `POST /v1/roster`.
    #[clap(long, env)]
    pub roster_file: Option<PathBuf>,

    /// Filter directives for tracing, same syntax as env_logger.
    #[clap(long, env, default_value = "info")]
    pub log_filter: String,
}

impl Arguments {
    /// Resolves the effective franchise seed from file, flags or defaults,
    /// in that order of precedence.
    pub fn franchise_seed(&self) -> anyhow::Result<Vec<FranchiseSeed>> {
        if let Some(path) = &self.franchise_file {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading franchise file {}", path.display()))?;
            let file: FranchiseFile = toml::from_str(&raw).context("parsing franchise file")?;
            anyhow::ensure!(!file.franchise.is_empty(), "franchise file defines no franchises");
            return Ok(file.franchise);
        }
        if !self.franchises.is_empty() {
            return Ok(self.franchises.clone());
        }
        Ok(DEFAULT_FRANCHISES
            .iter()
            .map(|&(name, budget)| FranchiseSeed {
                name: name.to_string(),
                budget,
            })
            .collect())
    }
}

impl fmt::Display for Arguments {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "bind_address: {}", self.bind_address)?;
        writeln!(f, "admin_secret: [REDACTED]")?;
        writeln!(f, "franchises: {:?}", self.franchises)?;
        writeln!(f, "franchise_file: {:?}", self.franchise_file)?;
        writeln!(f, "roster_file: {:?}", self.roster_file)?;
        writeln!(f, "log_filter: {}", self.log_filter)
    }
}

#[derive(Clone, Debug, serde::Deserialize)]
pub struct FranchiseSeed {
    pub name: String,
    pub budget: f64,
}

impl FromStr for FranchiseSeed {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let (name, budget) = value
            .split_once('=')
            .ok_or_else(|| format!("expected NAME=BUDGET, got {value:?}"))?;
        let budget: f64 = budget
            .trim()
            .parse()
            .map_err(|_| format!("invalid budget in {value:?}"))?;
        if budget < 0. {
            return Err(format!("negative budget in {value:?}"));
        }
        Ok(Self {
            name: name.trim().to_string(),
            budget,
        })
    }
}

#[derive(serde::Deserialize)]
struct FranchiseFile {
    franchise: Vec<FranchiseSeed>,
}

#[cfg(test)]
mod tests {
    use {super::*, clap::Parser};

    #[test]
    fn parses_franchise_pairs() {
        let seed: FranchiseSeed = "CSK=120.5".parse().unwrap();
        assert_eq!(seed.name, "CSK");
        assert_eq!(seed.budget, 120.5);

        assert!("CSK".parse::<FranchiseSeed>().is_err());
        assert!("CSK=abc".parse::<FranchiseSeed>().is_err());
        assert!("CSK=-5".parse::<FranchiseSeed>().is_err());
    }

    #[test]
    fn default_seed_when_nothing_configured() {
        let args = Arguments::parse_from(["auctionhouse", "--admin-secret", "s3cret"]);
        let seed = args.franchise_seed().unwrap();
        assert_eq!(seed.len(), 10);
        assert_eq!(seed[0].name, "CSK");
        assert_eq!(seed[0].budget, 100.);
    }

    #[test]
    fn explicit_franchises_override_defaults() {
        let args = Arguments::parse_from([
            "auctionhouse",
            "--admin-secret",
            "s3cret",
            "--franchise",
            "AAA=50,BBB=60",
        ]);
        let seed = args.franchise_seed().unwrap();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[1].name, "BBB");
        assert_eq!(seed[1].budget, 60.);
    }
}
