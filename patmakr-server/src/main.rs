use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use log::{error, warn};

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;

use patmakr_core::{GenerationError, Generator, LevelType, Origin, Specification};

/// Longest sequence a single request may ask for.
const MAX_SEQUENCE_LENGTH: usize = 10_000_000;

/// Struct representing query parameters for the `/v1/generate` and `/v1/levels` endpoints.
///
/// Missing fields fall back to `Specification::default()`.
#[derive(Deserialize)]
struct GenerateParams {
	sequence_length: Option<usize>,
	nb_levels: Option<usize>,
	origin: Option<String>,
	level_type: Option<String>,
	seed: Option<u64>, // -> fresh random generator if missing
}

impl GenerateParams {
	/// Builds the specification of the requested run.
	fn specification(&self) -> Result<Specification, GenerationError> {
		let mut specification = Specification::default();
		if let Some(sequence_length) = self.sequence_length {
			if sequence_length > MAX_SEQUENCE_LENGTH {
				return Err(GenerationError::SequenceTooLong { sequence_length, max: MAX_SEQUENCE_LENGTH });
			}
			specification.set_sequence_length(sequence_length)?;
		}
		if let Some(nb_levels) = self.nb_levels {
			specification.set_nb_levels(nb_levels)?;
		}
		if let Some(origin) = &self.origin {
			specification.set_origin(origin.parse::<Origin>()?);
		}
		if let Some(level_type) = &self.level_type {
			specification.set_level_type(level_type.parse::<LevelType>()?);
		}
		Ok(specification)
	}

	fn rng(&self) -> StdRng {
		match self.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Runs the generator once for the requested specification.
/// Returns the generated sequence and its diagnostics as JSON.
#[get("/v1/generate")]
async fn get_generated(query: web::Query<GenerateParams>) -> impl Responder {
	let specification = match query.specification() {
		Ok(s) => s,
		Err(e) => {
			warn!("rejected query: {e}");
			return HttpResponse::BadRequest().body(e.to_string());
		}
	};

	let mut rng = query.rng();
	match Generator::run(&specification, &mut rng) {
		Ok(generated) => HttpResponse::Ok().json(generated),
		Err(e) => {
			error!("generation failed: {e}");
			HttpResponse::InternalServerError().body(e.to_string())
		}
	}
}

/// HTTP GET endpoint `/v1/levels`
///
/// Returns the planned pattern lengths and their outcome, without generating.
#[get("/v1/levels")]
async fn get_levels(query: web::Query<GenerateParams>) -> impl Responder {
	let specification = match query.specification() {
		Ok(s) => s,
		Err(e) => {
			warn!("rejected query: {e}");
			return HttpResponse::BadRequest().body(e.to_string());
		}
	};

	match Generator::plan(&specification) {
		Ok(plans) => HttpResponse::Ok().json(plans),
		Err(e) => {
			warn!("rejected query: {e}");
			HttpResponse::BadRequest().body(e.to_string())
		}
	}
}

/// Main entry point for the server.
///
/// Every request is an independent run: no generator or alphabet is shared
/// between requests, so no state needs locking.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

	HttpServer::new(|| {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.service(get_generated)
			.service(get_levels)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::test as actix_test;

	fn params(query: &str) -> GenerateParams {
		web::Query::<GenerateParams>::from_query(query).unwrap().into_inner()
	}

	#[test]
	fn specification_from_query() {
		let specification = params("sequence_length=30&nb_levels=1&origin=lowest&level_type=many_patterns_twice")
			.specification()
			.unwrap();
		assert_eq!(
			specification,
			Specification::new(30, 1, Origin::Lowest, LevelType::ManyPatternsTwice).unwrap()
		);
		assert_eq!(params("").specification().unwrap(), Specification::default());
	}

	#[test]
	fn invalid_query_values_are_rejected() {
		assert_eq!(
			params("sequence_length=0").specification(),
			Err(GenerationError::InvalidSequenceLength)
		);
		assert_eq!(
			params("sequence_length=10000001").specification(),
			Err(GenerationError::SequenceTooLong { sequence_length: 10_000_001, max: MAX_SEQUENCE_LENGTH })
		);
		assert!(params("sequence_length=10000000").specification().is_ok());
		assert!(params("origin=middle").specification().is_err());
		assert!(params("level_type=thrice").specification().is_err());
	}

	#[actix_web::test]
	async fn generate_endpoint_is_reproducible() {
		let app = actix_test::init_service(App::new().service(get_generated)).await;

		let uri = "/v1/generate?sequence_length=100&seed=3";
		let first: serde_json::Value = actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
		let second: serde_json::Value = actix_test::call_and_read_body_json(&app, actix_test::TestRequest::get().uri(uri).to_request()).await;
		assert_eq!(first, second);
		assert_eq!(first["symbols"].as_array().unwrap().len(), 101);

		let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/v1/generate?nb_levels=0").to_request()).await;
		assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);

		for length in ["10000000000000", "18446744073709551615"] {
			let uri = format!("/v1/generate?sequence_length={length}");
			let response = actix_test::call_service(&app, actix_test::TestRequest::get().uri(&uri).to_request()).await;
			assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
		}
	}
}
