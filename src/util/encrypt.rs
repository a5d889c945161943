// Copyright 2019 The Grin Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Master secret encryption
//! A length-preserving Feistel permutation over the secret, keyed by
//! passphrase, iteration exponent and share set identifier

use crate::error::Error;
use zeroize::Zeroizing;

#[cfg(feature = "rust_crypto_pbkdf2")]
use hmac::Hmac;
#[cfg(feature = "ring_pbkdf2")]
use ring::pbkdf2;
#[cfg(feature = "rust_crypto_pbkdf2")]
use sha2::Sha256;
#[cfg(feature = "ring_pbkdf2")]
use std::num::NonZeroU32;

/// Config Struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterSecretEncConfig {
	/// The minimum number of iterations to use in PBKDF2
	pub min_iteration_count: u16,
	/// The number of rounds to use in the Feistel cipher
	pub round_count: u8,
	/// The customization string used in the RS1024 checksum and in the PBKDF2 salt
	pub customization_string: Vec<u8>,
}

impl Default for MasterSecretEncConfig {
	fn default() -> Self {
		let min_iteration_count = 10000;
		let round_count = 4;
		let customization_string = b"shamir".to_vec();

		MasterSecretEncConfig {
			min_iteration_count,
			round_count,
			customization_string,
		}
	}
}

impl MasterSecretEncConfig {
	/// Just use defaults for now
	pub fn new() -> Self {
		MasterSecretEncConfig {
			..Default::default()
		}
	}
}

/// Struct, so that config values are held
pub struct MasterSecretEnc {
	pub config: MasterSecretEncConfig,
}

impl Default for MasterSecretEnc {
	fn default() -> Self {
		MasterSecretEnc {
			config: MasterSecretEncConfig::new(),
		}
	}
}

impl MasterSecretEnc {
	/// Create a new encoder with all defaults
	pub fn new() -> Result<MasterSecretEnc, Error> {
		Ok(MasterSecretEnc {
			config: MasterSecretEncConfig::new(),
		})
	}

	pub fn encrypt(
		&self,
		master_secret: &[u8],
		passphrase: &str,
		iteration_exponent: u8,
		identifier: u16,
	) -> Vec<u8> {
		let mut l = Zeroizing::new(master_secret.to_owned());
		let mid = l.len() / 2;
		let mut r = Zeroizing::new(l.split_off(mid));
		let salt = self.get_salt(identifier);
		for i in 0..self.config.round_count {
			let f = self.round_function(i, passphrase, iteration_exponent, &salt, &r);
			let next_r = Zeroizing::new(self.xor(&l, &f));
			l = r;
			r = next_r;
		}
		let mut retval = Vec::with_capacity(master_secret.len());
		retval.extend_from_slice(&r);
		retval.extend_from_slice(&l);
		retval
	}

	pub fn decrypt(
		&self,
		enc_master_secret: &[u8],
		passphrase: &str,
		iteration_exponent: u8,
		identifier: u16,
	) -> Vec<u8> {
		let mut l = Zeroizing::new(enc_master_secret.to_owned());
		let mid = l.len() / 2;
		let mut r = Zeroizing::new(l.split_off(mid));
		let salt = self.get_salt(identifier);
		for i in (0..self.config.round_count).rev() {
			let f = self.round_function(i, passphrase, iteration_exponent, &salt, &r);
			let next_r = Zeroizing::new(self.xor(&l, &f));
			l = r;
			r = next_r;
		}
		let mut retval = Vec::with_capacity(enc_master_secret.len());
		retval.extend_from_slice(&r);
		retval.extend_from_slice(&l);
		retval
	}

	fn get_salt(&self, identifier: u16) -> Vec<u8> {
		let mut retval = self.config.customization_string.clone();
		retval.extend_from_slice(&identifier.to_be_bytes());
		retval
	}

	/// the round function used internally by the Feistel cipher
	fn round_function(
		&self,
		i: u8,
		passphrase: &str,
		e: u8,
		salt: &[u8],
		r: &[u8],
	) -> Zeroizing<Vec<u8>> {
		let iterations =
			(u32::from(self.config.min_iteration_count) << e) / u32::from(self.config.round_count);
		let mut full_salt = Zeroizing::new(salt.to_owned());
		full_salt.extend_from_slice(r);
		let mut password = Zeroizing::new(vec![i]);
		password.extend_from_slice(passphrase.as_bytes());
		self.pbkdf2_derive(iterations, &full_salt, &password, r.len())
	}

	#[cfg(feature = "rust_crypto_pbkdf2")]
	fn pbkdf2_derive(
		&self,
		iterations: u32,
		salt: &[u8],
		password: &[u8],
		out_length: usize,
	) -> Zeroizing<Vec<u8>> {
		let mut out = Zeroizing::new(vec![0; out_length]);
		pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut out)
			.expect("HMAC can take a key of any size");
		out
	}

	// Ring implementation of round function
	#[cfg(feature = "ring_pbkdf2")]
	fn pbkdf2_derive(
		&self,
		iterations: u32,
		salt: &[u8],
		password: &[u8],
		out_length: usize,
	) -> Zeroizing<Vec<u8>> {
		let mut out = Zeroizing::new(vec![0; out_length]);
		pbkdf2::derive(
			pbkdf2::PBKDF2_HMAC_SHA256,
			NonZeroU32::new(iterations).expect("iteration count is never zero"),
			salt,
			password,
			&mut out,
		);
		out
	}

	// xor values in both arrays, up to length of b
	fn xor(&self, a: &[u8], b: &[u8]) -> Vec<u8> {
		let mut retval = vec![0; b.len()];
		for i in 0..b.len() {
			retval[i] = a[i] ^ b[i];
		}
		retval
	}
}
