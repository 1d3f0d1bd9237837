use std::convert::Infallible;
use std::iter;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use futures::stream;

use fr_numerals_core::model::generator::Emissions;
use fr_numerals_core::{spell, Agreement, Conjunction, Magnitude, NumeralGenerator, Spelling};
use log::info;
use serde::Deserialize;

/// Fixture lines per response chunk
const CHUNK_LINES: usize = 4096;

/// Spelling policy fields, accepted by every endpoint alongside its own parameters
#[derive(Deserialize)]
struct SpellingParams {
	conjunction: Option<Conjunction>,
	eighty: Option<Agreement>,
	hundreds: Option<Agreement>,
}

/// Query parameters for the `/v1/spell` endpoint
#[derive(Deserialize)]
struct SpellParams {
	number: u64,
}

/// Query parameters for the `/v1/numerals` endpoint
#[derive(Deserialize)]
struct NumeralsParams {
	class: String,
	zero: Option<bool>,
}

impl SpellingParams {
	/// Missing fields fall back to the default policy.
	fn spelling(&self) -> Spelling {
		let default = Spelling::default();
		Spelling {
			conjunction: self.conjunction.unwrap_or(default.conjunction),
			eighty: self.eighty.unwrap_or(default.eighty),
			hundreds: self.hundreds.unwrap_or(default.hundreds),
		}
	}
}

/// GET /v1/spell
///
/// Returns the French words of a single number.
#[get("/v1/spell")]
async fn get_spell(query: web::Query<SpellParams>, policy: web::Query<SpellingParams>) -> impl Responder {
	match spell(query.number, &policy.spelling()) {
		Ok(words) => HttpResponse::Ok().body(words),
		Err(e) => HttpResponse::BadRequest().body(e.to_string()),
	}
}

/// GET /v1/numerals
///
/// Streams the whole fixture of a magnitude class as TSV.
/// The billion class is refused: the body would be tens of gigabytes.
#[get("/v1/numerals")]
async fn get_numerals(query: web::Query<NumeralsParams>, policy: web::Query<SpellingParams>) -> impl Responder {
	let magnitude = match query.class.parse::<Magnitude>() {
		Ok(Magnitude::Billion) => return HttpResponse::BadRequest().body("Class 1000000000 is too large, use the command-line tool"),
		Ok(m) => m,
		Err(e) => return HttpResponse::BadRequest().body(e.to_string()),
	};

	let generator = NumeralGenerator::new(magnitude, policy.spelling()).with_zero(query.zero.unwrap_or(false));
	info!("streaming numerals for class {magnitude}");

	let chunks = tsv_chunks(generator.emissions(), CHUNK_LINES).map(Ok::<_, Infallible>);
	HttpResponse::Ok()
		.content_type("text/tab-separated-values; charset=utf-8")
		.streaming(stream::iter(chunks))
}

/// Groups fixture lines into chunks of at most `lines` lines.
///
/// Only one chunk is held in memory at a time.
fn tsv_chunks(mut emissions: Emissions, lines: usize) -> impl Iterator<Item = web::Bytes> {
	iter::from_fn(move || {
		let mut chunk = String::new();
		for emission in emissions.by_ref().take(lines) {
			chunk.push_str(&emission.to_string());
			chunk.push('\n');
		}
		(!chunk.is_empty()).then(|| web::Bytes::from(chunk))
	})
}

/// Main entry point for the server.
///
/// Generation is stateless, so handlers share nothing.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();
	info!("listening on 127.0.0.1:5000");

	HttpServer::new(|| {
		App::new()
			.service(get_spell)
			.service(get_numerals)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::{http::StatusCode, test};

	#[actix_web::test]
	async fn spells_one_number() {
		let app = test::init_service(App::new().service(get_spell)).await;

		let req = test::TestRequest::get().uri("/v1/spell?number=71").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, web::Bytes::from_static("soixante et onze".as_bytes()));

		let req = test::TestRequest::get().uri("/v1/spell?number=71&conjunction=hyphenated").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body, web::Bytes::from_static("soixante-et-onze".as_bytes()));
	}

	#[actix_web::test]
	async fn rejects_out_of_range_number() {
		let app = test::init_service(App::new().service(get_spell)).await;
		let req = test::TestRequest::get().uri("/v1/spell?number=1000000000").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[actix_web::test]
	async fn serves_hundred_class_fixture() {
		let app = test::init_service(App::new().service(get_numerals)).await;
		let req = test::TestRequest::get().uri("/v1/numerals?class=100&zero=true").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 100);
		assert_eq!(lines[0], "zéro\t0");
		assert_eq!(lines[80], "quatre-vingts\t80");
	}

	#[actix_web::test]
	async fn streams_thousand_class_in_order() {
		let app = test::init_service(App::new().service(get_numerals)).await;
		let req = test::TestRequest::get().uri("/v1/numerals?class=1000&hundreds=invariant").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let text = String::from_utf8(body.to_vec()).unwrap();
		let lines: Vec<&str> = text.lines().collect();
		assert_eq!(lines.len(), 999);
		assert_eq!(lines[199], "deux cent\t200");
		assert_eq!(lines[998], "neuf cent quatre-vingt-dix-neuf\t999");
	}

	#[::core::prelude::v1::test]
	fn chunks_hold_a_bounded_number_of_lines() {
		let generator = NumeralGenerator::new(Magnitude::Hundred, Spelling::default());
		let chunks: Vec<web::Bytes> = tsv_chunks(generator.emissions(), 10).collect();
		assert_eq!(chunks.len(), 10);
		assert!(chunks.iter().all(|chunk| chunk.iter().filter(|b| **b == b'\n').count() <= 10));
		assert!(chunks[0].starts_with(b"un\t1\n"));
		assert!(chunks[9].ends_with("quatre-vingt-dix-neuf\t99\n".as_bytes()));
	}

	#[actix_web::test]
	async fn rejects_unknown_and_billion_classes() {
		let app = test::init_service(App::new().service(get_numerals)).await;
		for class in ["42", "1000000000"] {
			let req = test::TestRequest::get().uri(&format!("/v1/numerals?class={class}")).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
		}
	}
}
