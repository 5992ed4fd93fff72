use time::{
	Date, OffsetDateTime,
	macros::{date, datetime},
};

use crate::{
	models::{Category, Listing, Location, PublicationStatus, User, UserRole},
	store::MemoryStore,
};

/// Development fixture set standing in for a real backend. The listing dates
/// straddle 2024-06-22: on that day exactly 11 of the 15 listings pass the
/// public eligibility gate (one is paused, three have already gone inactive).
pub fn seeded() -> MemoryStore {
	let categories = seed_categories();
	let locations = seed_locations();
	let chia = location(
		"location-9",
		"Chía",
		"Cundinamarca",
		"Savanna town just north of Bogotá.",
		"Central department of Colombia.",
		datetime!(2024-01-01 00:00:00 UTC),
	);
	let villavicencio = location(
		"location-10",
		"Villavicencio",
		"Meta",
		"Gateway to the eastern plains.",
		"Department of the eastern plains.",
		datetime!(2024-01-01 00:00:00 UTC),
	);
	let armenia = location(
		"location-11",
		"Armenia",
		"Quindío",
		"The miracle city of the coffee axis.",
		"Coffee-axis department.",
		datetime!(2024-01-01 00:00:00 UTC),
	);
	let manizales = location(
		"location-12",
		"Manizales",
		"Caldas",
		"Capital of the Caldas department.",
		"Coffee-axis department.",
		datetime!(2024-01-01 00:00:00 UTC),
	);
	let listings = vec![
		listing(
			"listing-1",
			"Luxury House Zona Rosa",
			"Luxury house in the exclusive Zona Rosa of Bogotá, with a private garden and a two-car garage.",
			&categories[0],
			4,
			3,
			850_000_000,
			&locations[0],
			date!(2024 - 06 - 19),
			PublicationStatus::Published,
			datetime!(2024-06-15 10:00:00 UTC),
			"seller-1",
			350,
		),
		listing(
			"listing-2",
			"Modern Downtown Apartment",
			"Modern apartment in downtown Medellín with a panoramic view, gym, pool, and social area.",
			&categories[1],
			2,
			2,
			420_000_000,
			&locations[1],
			date!(2024 - 06 - 20),
			PublicationStatus::Published,
			datetime!(2024-06-16 14:30:00 UTC),
			"seller-2",
			95,
		),
		listing(
			"listing-3",
			"Exclusive Penthouse Cartagena",
			"Spectacular seafront penthouse in Cartagena with a private rooftop terrace and jacuzzi.",
			&categories[2],
			3,
			4,
			1_200_000_000,
			&locations[4],
			date!(2024 - 06 - 25),
			PublicationStatus::Paused,
			datetime!(2024-06-17 09:15:00 UTC),
			"seller-3",
			180,
		),
		listing(
			"listing-4",
			"Family House Cali",
			"Spacious family house in a gated community with green areas, parking, and a communal hall.",
			&categories[0],
			4,
			3,
			650_000_000,
			&locations[2],
			date!(2024 - 06 - 22),
			PublicationStatus::Published,
			datetime!(2024-06-18 08:00:00 UTC),
			"seller-2",
			280,
		),
		listing(
			"listing-5",
			"Student Apartment Barranquilla",
			"Comfortable apartment near the universities, ideal for students or young professionals.",
			&categories[1],
			1,
			1,
			280_000_000,
			&locations[3],
			date!(2024 - 06 - 21),
			PublicationStatus::Published,
			datetime!(2024-06-18 11:30:00 UTC),
			"seller-4",
			55,
		),
		listing(
			"listing-6",
			"Retail Space Zona Rosa",
			"Excellent retail unit in the Zona Rosa of Bogotá, ideal for a restaurant or a shop.",
			&categories[4],
			0,
			2,
			800_000_000,
			&locations[0],
			date!(2024 - 06 - 25),
			PublicationStatus::Published,
			datetime!(2024-06-18 16:45:00 UTC),
			"seller-1",
			120,
		),
		listing(
			"listing-7",
			"Executive Office El Poblado",
			"Modern fully furnished office in El Poblado, Medellín, with a panoramic view.",
			&categories[3],
			0,
			1,
			450_000_000,
			&locations[1],
			date!(2024 - 06 - 23),
			PublicationStatus::Published,
			datetime!(2024-06-18 13:20:00 UTC),
			"seller-3",
			80,
		),
		listing(
			"listing-8",
			"Country House Chía",
			"Beautiful country house in Chía with a garden, barbecue area, and a view of the eastern hills.",
			&categories[0],
			5,
			4,
			950_000_000,
			&chia,
			date!(2024 - 06 - 24),
			PublicationStatus::Published,
			datetime!(2024-06-18 15:10:00 UTC),
			"seller-5",
			400,
		),
		listing(
			"listing-9",
			"Loft Apartment Historic Center",
			"Elegant loft in the historic center of Cartagena, fully restored with colonial character.",
			&categories[1],
			2,
			2,
			780_000_000,
			&locations[4],
			date!(2025 - 06 - 20),
			PublicationStatus::Published,
			datetime!(2025-06-18 10:00:00 UTC),
			"seller-2",
			110,
		),
		listing(
			"listing-10",
			"Modern House Santa Marta",
			"Three-level modern house near the beach in Santa Marta, with a private pool and covered garage.",
			&categories[0],
			4,
			3,
			720_000_000,
			&locations[7],
			date!(2025 - 06 - 21),
			PublicationStatus::Published,
			datetime!(2025-06-18 12:30:00 UTC),
			"seller-3",
			320,
		),
		listing(
			"listing-11",
			"Executive Apartment Bucaramanga",
			"Modern executive apartment in the financial district of Bucaramanga, ideal for professionals.",
			&categories[1],
			3,
			2,
			380_000_000,
			&locations[5],
			date!(2025 - 06 - 22),
			PublicationStatus::Published,
			datetime!(2025-06-18 14:15:00 UTC),
			"seller-1",
			85,
		),
		listing(
			"listing-12",
			"Exclusive Penthouse Pereira",
			"Impressive penthouse overlooking the coffee-axis capital, with luxury finishes and wide spaces.",
			&categories[2],
			4,
			5,
			1_100_000_000,
			&locations[6],
			date!(2025 - 06 - 25),
			PublicationStatus::Published,
			datetime!(2025-06-18 16:00:00 UTC),
			"seller-4",
			200,
		),
		listing(
			"listing-13",
			"Family House Villavicencio",
			"Roomy family house in a gated community with a pool, barbecue zone, and green areas.",
			&categories[0],
			5,
			4,
			580_000_000,
			&villavicencio,
			date!(2025 - 06 - 23),
			PublicationStatus::Published,
			datetime!(2025-06-18 09:45:00 UTC),
			"seller-5",
			380,
		),
		listing(
			"listing-14",
			"Retail Space Armenia",
			"Excellent retail unit in downtown Armenia, well located and fit for any kind of business.",
			&categories[4],
			0,
			1,
			320_000_000,
			&armenia,
			date!(2025 - 06 - 24),
			PublicationStatus::Published,
			datetime!(2025-06-18 11:20:00 UTC),
			"seller-2",
			90,
		),
		listing(
			"listing-15",
			"Student Apartment Manizales",
			"Comfortable apartment near the universities in Manizales, with all services included.",
			&categories[1],
			2,
			1,
			250_000_000,
			&manizales,
			date!(2025 - 06 - 26),
			PublicationStatus::Published,
			datetime!(2025-06-18 17:30:00 UTC),
			"seller-3",
			60,
		),
	];

	MemoryStore {
		listings: listings.into(),
		locations: locations.into(),
		categories: categories.into(),
		users: seed_users().into(),
	}
}

fn seed_categories() -> Vec<Category> {
	let created = datetime!(2024-01-01 00:00:00 UTC);

	vec![
		category("category-1", "House", "Traditional single-family houses", created),
		category("category-2", "Apartment", "Urban apartments", created),
		category("category-3", "Penthouse", "Luxury penthouses", created),
		category("category-4", "Office", "Office spaces", created),
		category("category-5", "Retail Space", "Premises for business", created),
	]
}

fn seed_locations() -> Vec<Location> {
	vec![
		location(
			"location-1",
			"Bogotá",
			"Cundinamarca",
			"Capital of Colombia, economic and political center of the country.",
			"Central department of Colombia, known for industry and tourism.",
			datetime!(2024-01-15 10:00:00 UTC),
		),
		location(
			"location-2",
			"Medellín",
			"Antioquia",
			"City of eternal spring, known for innovation and a mild climate.",
			"Northwestern department famous for coffee, flowers, and enterprise.",
			datetime!(2024-01-15 10:05:00 UTC),
		),
		location(
			"location-3",
			"Cali",
			"Valle del Cauca",
			"World capital of salsa and economic hub of the southwest.",
			"Southwestern department known for agriculture and the port of Buenaventura.",
			datetime!(2024-01-15 10:10:00 UTC),
		),
		location(
			"location-4",
			"Barranquilla",
			"Atlántico",
			"Golden gate of Colombia, famous for its carnival and its Caribbean port.",
			"Caribbean department known for its coastal culture.",
			datetime!(2024-01-15 10:15:00 UTC),
		),
		location(
			"location-5",
			"Cartagena",
			"Bolívar",
			"Heroic walled city and world heritage site on the Caribbean.",
			"Caribbean department rich in history and tourism.",
			datetime!(2024-01-15 10:20:00 UTC),
		),
		location(
			"location-6",
			"Bucaramanga",
			"Santander",
			"The pretty city of Colombia, known for its quality of life.",
			"Northeastern department known for its oil industry.",
			datetime!(2024-01-15 10:25:00 UTC),
		),
		location(
			"location-7",
			"Pereira",
			"Risaralda",
			"Pearl of the Otún, heart of the coffee axis.",
			"Coffee-axis department famous for high-quality coffee.",
			datetime!(2024-01-15 10:30:00 UTC),
		),
		location(
			"location-8",
			"Santa Marta",
			"Magdalena",
			"Pearl of the Colombian Caribbean, beaches and the Sierra Nevada.",
			"Caribbean department spanning beaches to snowy peaks.",
			datetime!(2024-01-15 10:35:00 UTC),
		),
	]
}

fn seed_users() -> Vec<User> {
	let mut users = vec![User {
		id: "admin-1".to_string(),
		first_name: "System".to_string(),
		last_name: "Administrator".to_string(),
		document_id: "12345678".to_string(),
		phone: "+573001234567".to_string(),
		birth_date: date!(1990 - 01 - 01),
		email: "admin@hogar360.com".to_string(),
		role: UserRole::Admin,
		password_hash: String::new(),
		created_at: datetime!(2024-01-01 00:00:00 UTC),
		updated_at: datetime!(2024-01-01 00:00:00 UTC),
	}];

	users.extend([
		seller(
			"seller-1",
			"Carlos",
			"Rodríguez",
			"87654321",
			"+573009876543",
			date!(1985 - 05 - 15),
			"carlos.rodriguez@hogar360.com",
		),
		seller(
			"seller-2",
			"María",
			"González",
			"11223344",
			"+573005556677",
			date!(1992 - 08 - 20),
			"maria.gonzalez@hogar360.com",
		),
		seller(
			"seller-3",
			"Juan",
			"Pérez",
			"99887766",
			"+573007778899",
			date!(1988 - 03 - 10),
			"juan.perez@hogar360.com",
		),
		seller(
			"seller-4",
			"Ana",
			"López",
			"55443322",
			"+573002223333",
			date!(1995 - 12 - 05),
			"ana.lopez@hogar360.com",
		),
		seller(
			"seller-5",
			"Diego",
			"Martínez",
			"66778899",
			"+573004445555",
			date!(1991 - 07 - 22),
			"diego.martinez@hogar360.com",
		),
		seller(
			"seller-6",
			"Patricia",
			"Herrera",
			"33445566",
			"+573006667777",
			date!(1987 - 11 - 18),
			"patricia.herrera@hogar360.com",
		),
		seller(
			"seller-7",
			"Roberto",
			"Silva",
			"77889900",
			"+573008889999",
			date!(1993 - 04 - 12),
			"roberto.silva@hogar360.com",
		),
		seller(
			"seller-8",
			"Lucía",
			"Torres",
			"44556677",
			"+573001112222",
			date!(1989 - 09 - 30),
			"lucia.torres@hogar360.com",
		),
	]);

	users
}

fn category(id: &str, name: &str, description: &str, created: OffsetDateTime) -> Category {
	Category {
		id: id.to_string(),
		name: name.to_string(),
		description: description.to_string(),
		created_at: created,
		updated_at: created,
	}
}

fn location(
	id: &str,
	city: &str,
	department: &str,
	city_description: &str,
	department_description: &str,
	created: OffsetDateTime,
) -> Location {
	Location {
		id: id.to_string(),
		city: city.to_string(),
		department: department.to_string(),
		city_description: city_description.to_string(),
		department_description: department_description.to_string(),
		created_at: created,
		updated_at: created,
	}
}

fn seller(
	id: &str,
	first_name: &str,
	last_name: &str,
	document_id: &str,
	phone: &str,
	birth_date: Date,
	email: &str,
) -> User {
	User {
		id: id.to_string(),
		first_name: first_name.to_string(),
		last_name: last_name.to_string(),
		document_id: document_id.to_string(),
		phone: phone.to_string(),
		birth_date,
		email: email.to_string(),
		role: UserRole::Seller,
		password_hash: String::new(),
		created_at: datetime!(2024-01-01 00:00:00 UTC),
		updated_at: datetime!(2024-01-01 00:00:00 UTC),
	}
}

#[allow(clippy::too_many_arguments)]
fn listing(
	id: &str,
	name: &str,
	description: &str,
	category: &Category,
	rooms: u32,
	baths: u32,
	price: i64,
	location: &Location,
	active_from: Date,
	status: PublicationStatus,
	published_at: OffsetDateTime,
	seller_id: &str,
	area: u32,
) -> Listing {
	Listing {
		id: id.to_string(),
		name: name.to_string(),
		description: description.to_string(),
		category: category.clone(),
		rooms,
		baths,
		price,
		location: location.clone(),
		active_from,
		status,
		published_at,
		seller_id: seller_id.to_string(),
		area: Some(area),
		image_urls: Vec::new(),
		created_at: published_at,
		updated_at: published_at,
	}
}
