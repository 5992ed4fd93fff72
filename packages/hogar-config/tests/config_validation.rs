use std::{fs, path::PathBuf};

fn base_toml() -> String {
	r#"
[service]
http_bind = "127.0.0.1:8080"
log_level = "info"

[latency]
list_ms = 800
search_ms = 600
mutate_ms = 1000

[search]
listing_page_size = 12
default_page_size = 10
max_page_size = 100
default_sort = "date"
default_direction = "desc"

[listing]
publication_window_days = 30
min_price = 100000
max_price = 50000000000
max_rooms = 20
max_baths = 15
max_images = 10
"#
	.to_string()
}

fn write_temp(contents: &str) -> PathBuf {
	let path = std::env::temp_dir().join(format!("hogar-config-{}.toml", std::process::id()));

	fs::write(&path, contents).expect("Failed to write temp config.");

	path
}

fn parse(contents: &str) -> hogar_config::Config {
	toml::from_str(contents).expect("Failed to parse config.")
}

#[test]
fn loads_valid_config() {
	let path = write_temp(&base_toml());
	let cfg = hogar_config::load(&path).expect("valid config");

	assert_eq!(cfg.search.listing_page_size, 12);
	assert_eq!(cfg.search.default_page_size, 10);
	assert_eq!(cfg.latency.search_ms, 600);
	assert_eq!(cfg.listing.publication_window_days, 30);

	let _ = fs::remove_file(path);
}

#[test]
fn latency_defaults_to_zero_when_omitted() {
	let raw = base_toml().replace("list_ms = 800", "").replace("search_ms = 600", "").replace(
		"mutate_ms = 1000",
		"",
	);
	let cfg = parse(&raw);

	assert_eq!(cfg.latency.list_ms, 0);
	assert_eq!(cfg.latency.mutate_ms, 0);
}

#[test]
fn rejects_zero_page_size() {
	let cfg = parse(&base_toml().replace("listing_page_size = 12", "listing_page_size = 0"));

	assert!(hogar_config::validate(&cfg).is_err());
}

#[test]
fn rejects_max_page_size_below_defaults() {
	let cfg = parse(&base_toml().replace("max_page_size = 100", "max_page_size = 5"));

	assert!(hogar_config::validate(&cfg).is_err());
}

#[test]
fn rejects_unknown_sort_key() {
	let cfg = parse(&base_toml().replace(r#"default_sort = "date""#, r#"default_sort = "rooms""#));

	assert!(hogar_config::validate(&cfg).is_err());
}

#[test]
fn rejects_inverted_price_bounds() {
	let cfg = parse(&base_toml().replace("min_price = 100000", "min_price = 60000000000"));

	assert!(hogar_config::validate(&cfg).is_err());
}

#[test]
fn rejects_empty_http_bind() {
	let cfg = parse(&base_toml().replace(r#"http_bind = "127.0.0.1:8080""#, r#"http_bind = " ""#));

	assert!(hogar_config::validate(&cfg).is_err());
}
