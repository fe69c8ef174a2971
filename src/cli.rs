use clap::{Args, Parser, Subcommand};
use p360_core::{GroupField, SortField, ALL};
use std::path::PathBuf;

/// Product 360 catalog browser - list, filter and compare products
///
/// Examples:
///   # Log in and show the first page
///   p360 --user ana list
///
///   # Browse a payload saved earlier, without logging in
///   p360 --payload items.json list --segment Smartphones --query galaxy
///
///   # Compare two to four products by name
///   p360 --payload items.json compare "Galaxy S24" "iPhone 15"
///
///   # Save the raw search payload for offline use
///   p360 --user ana fetch --out items.json
#[derive(Parser, Debug)]
#[command(name = "p360")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - --query matches part of the product name, ignoring case\n  \
    - --segment and --brand must match exactly; \"All\" disables them\n  \
    - All active filters are combined with AND\n\n\
Credentials:\n  \
    - --user / --password, or P360_USERNAME / P360_PASSWORD (also read from .env)\n  \
    - Endpoints and page sizes can be set in ~/.p360/config.toml")]
pub struct Cli {
    /// Read the search payload from a JSON file instead of the API
    #[arg(long, global = true, value_name = "FILE")]
    pub payload: Option<PathBuf>,

    /// Product 360 username
    #[arg(short, long, global = true, value_name = "NAME")]
    pub user: Option<String>,

    /// Product 360 password
    #[arg(long, global = true, value_name = "SECRET")]
    pub password: Option<String>,

    /// Config file (defaults to ~/.p360/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log to stderr instead of p360.log
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show one page of the filtered catalog
    List(ListArgs),
    /// Compare 2 to 4 products side by side
    Compare(CompareArgs),
    /// List the segment and brand filter options
    Options,
    /// Log in, fetch the catalog and save it to a file
    Fetch(FetchArgs),
    /// Report data-quality issues in the catalog
    Check,
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// Part of the product name (case-insensitive)
    #[arg(short, long, default_value = "", value_name = "TEXT")]
    pub query: String,

    /// Segment to show, or "All"
    #[arg(short, long, default_value = ALL, value_name = "SEGMENT")]
    pub segment: String,

    /// Brand to show, or "All"
    #[arg(short, long, default_value = ALL, value_name = "BRAND")]
    pub brand: String,

    /// Page number (out-of-range values are clamped)
    #[arg(short, long, default_value_t = 1, value_name = "N")]
    pub page: usize,

    /// Items per page
    #[arg(long, value_name = "N")]
    pub per_page: Option<usize>,

    /// Sort by name, brand, segment or price
    #[arg(long, value_name = "FIELD", value_parser = parse_sort_field)]
    pub sort: Option<SortField>,

    /// Group the page by segment or brand
    #[arg(short = 'G', long = "group-by", value_name = "FIELD", value_parser = parse_group_field)]
    pub group_by: Option<GroupField>,

    /// Download product images (placeholders on failure)
    #[arg(long)]
    pub images: bool,
}

#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Product names; the first product with each name is used
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,
}

#[derive(Args, Debug, Clone)]
pub struct FetchArgs {
    /// Where to write the payload
    #[arg(short, long, value_name = "FILE")]
    pub out: PathBuf,

    /// Write the normalized catalog instead of the raw payload
    #[arg(long)]
    pub normalized: bool,
}

fn parse_sort_field(s: &str) -> Result<SortField, String> {
    SortField::from_str(s).ok_or_else(|| format!("unknown sort field '{}' (name, brand, segment, price)", s))
}

fn parse_group_field(s: &str) -> Result<GroupField, String> {
    GroupField::from_str(s).ok_or_else(|| format!("unknown group field '{}' (segment, brand)", s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_list_defaults() {
        let cli = Cli::try_parse_from(["p360", "--payload", "items.json", "list"]).unwrap();
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.query, "");
        assert_eq!(args.segment, ALL);
        assert_eq!(args.brand, ALL);
        assert_eq!(args.page, 1);
        assert!(args.sort.is_none());
    }

    #[test]
    fn test_list_with_filters_and_sort() {
        let cli = Cli::try_parse_from([
            "p360", "list", "-q", "galaxy", "-s", "Smartphones", "--sort", "price", "-G", "brand",
            "--user", "ana",
        ])
        .unwrap();
        assert_eq!(cli.user.as_deref(), Some("ana"));
        let Command::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.sort, Some(SortField::Price));
        assert_eq!(args.group_by, Some(GroupField::Brand));
    }

    #[test]
    fn test_rejects_unknown_sort_field() {
        assert!(Cli::try_parse_from(["p360", "list", "--sort", "rating"]).is_err());
    }

    #[test]
    fn test_compare_collects_names() {
        let cli = Cli::try_parse_from(["p360", "compare", "Phone X", "Sofa Y"]).unwrap();
        let Command::Compare(args) = cli.command else {
            panic!("expected compare");
        };
        assert_eq!(args.names, vec!["Phone X", "Sofa Y"]);
    }
}
