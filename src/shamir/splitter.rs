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

//! Single-level secret splitting and recovery, used once at the group
//! level and once per group at the member level

use crate::error::{Error, ErrorKind};
use crate::shamir::Share;
use crate::util;

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;
use std::mem;
use zeroize::{Zeroize, Zeroizing};

use crate::field::gf256::Gf256;
use crate::field::lagrange;

// Create alias for HMAC-SHA256
type HmacSha256 = Hmac<Sha256>;

/// Share split configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterConfig {
	/// The maximum number of shares that can be created
	pub max_share_count: u8,
	/// The length of the digest of the shared secret in bytes
	pub digest_length_bytes: u8,
	/// The index of the share containing the shared secret
	pub secret_index: u8,
	/// The index of the share containing the digest of the shared secret
	pub digest_index: u8,
}

impl Default for SplitterConfig {
	fn default() -> Self {
		let max_share_count = 16;
		let digest_length_bytes = 4;
		let secret_index = 255;
		let digest_index = 254;

		SplitterConfig {
			max_share_count,
			digest_length_bytes,
			secret_index,
			digest_index,
		}
	}
}

impl SplitterConfig {
	/// Just use defaults for now
	pub fn new() -> Self {
		SplitterConfig {
			..Default::default()
		}
	}
}

/// Main Struct
pub struct Splitter {
	/// Configuration values
	config: SplitterConfig,
}

impl Splitter {
	/// Create new
	pub fn new(config: Option<&SplitterConfig>) -> Splitter {
		Splitter {
			config: match config {
				Some(c) => c.to_owned(),
				None => SplitterConfig::new(),
			},
		}
	}

	/// split a secret into share_count shares, threshold of which recover it.
	/// The secret must be at least 128 bits and a multiple of 16 bits.
	/// A threshold of 1 hands the secret to every share verbatim.
	pub fn split_secret<R: Rng>(
		&self,
		proto_share: &Share,
		threshold: u8,
		share_count: u8,
		shared_secret: &[u8],
		rng: &mut R,
	) -> Result<Vec<Share>, Error> {
		if threshold == 0 || threshold > self.config.max_share_count {
			return Err(ErrorKind::Argument(format!(
				"Threshold must be between 1 and {}",
				self.config.max_share_count
			)))?;
		}
		if share_count < threshold || share_count > self.config.max_share_count {
			return Err(ErrorKind::Argument(format!(
				"Share count with given member threshold must be between {} and {}",
				threshold, self.config.max_share_count
			)))?;
		}
		if shared_secret.len() < 16 || shared_secret.len() % 2 != 0 {
			return Err(ErrorKind::Argument(
				"Secret must be at least 16 bytes in length and a multiple of 2".to_string(),
			))?;
		}

		let mut shares = vec![];
		// if the threshold is 1, then the digest of the shared secret is not used
		if threshold == 1 {
			for i in 0..share_count {
				let mut s = proto_share.clone();
				s.member_index = i;
				s.member_threshold = threshold;
				s.share_value = shared_secret.to_owned();
				shares.push(s);
			}
			return Ok(shares);
		}

		let random_share_count = threshold - 2;

		for i in 0..random_share_count {
			let mut s = proto_share.clone();
			s.member_index = i;
			s.member_threshold = threshold;
			s.share_value = util::fill_vec_rand(shared_secret.len(), rng);
			shares.push(s);
		}

		let random_part = Zeroizing::new(util::fill_vec_rand(
			shared_secret.len() - self.config.digest_length_bytes as usize,
			rng,
		));
		let mut digest = self.create_digest(&random_part, shared_secret);
		digest.extend_from_slice(&random_part);

		let mut base_shares = shares.clone();
		let mut s = proto_share.clone();
		s.member_index = self.config.digest_index;
		s.member_threshold = threshold;
		s.share_value = digest;
		base_shares.push(s);

		let mut s = proto_share.clone();
		s.member_index = self.config.secret_index;
		s.member_threshold = threshold;
		s.share_value = shared_secret.to_owned();
		base_shares.push(s);

		for i in random_share_count..share_count {
			let mut r = self.interpolate(&base_shares, i, proto_share)?;
			r.member_index = i;
			r.member_threshold = threshold;
			shares.push(r);
		}

		Ok(shares)
	}

	/// recover a secret from threshold or more shares
	pub fn recover_secret(&self, shares: &[Share], threshold: u8) -> Result<Share, Error> {
		if shares.is_empty() {
			return Err(ErrorKind::Argument(
				"Share set must not be empty.".to_string(),
			))?;
		}
		let mut proto_share = shares[0].clone();
		proto_share.share_value.zeroize();

		let shared_secret = self.interpolate(shares, self.config.secret_index, &proto_share)?;

		if threshold != 1 {
			self.check_digest(shares, &shared_secret, &proto_share)?;
		}

		Ok(shared_secret)
	}

	fn interpolate(&self, shares: &[Share], x: u8, proto_share: &Share) -> Result<Share, Error> {
		let x_coords: Vec<u8> = shares.iter().map(|s| s.member_index).collect();

		if x_coords.contains(&x) {
			for s in shares {
				if s.member_index == x {
					let mut ret_s = proto_share.clone();
					ret_s.member_index = x;
					ret_s.share_value = s.share_value.clone();
					return Ok(ret_s);
				}
			}
		}

		let share_value_length = shares[0].share_value.len();
		for s in shares {
			if s.share_value.len() != share_value_length {
				return Err(ErrorKind::InvalidShareSet(
					"All share values must have the same length".to_string(),
				))?;
			}
		}

		let mut ret_share = proto_share.clone();
		ret_share.member_index = x;

		for i in 0..share_value_length {
			let points: Vec<(Gf256, Gf256)> = shares
				.iter()
				.map(|s| {
					(
						Gf256::from_byte(s.member_index),
						Gf256::from_byte(s.share_value[i]),
					)
				})
				.collect();
			let poly = lagrange::interpolate(&points);
			let y = poly.evaluate_at(Gf256::from_byte(x));
			ret_share.share_value.push(y.to_byte());
		}

		Ok(ret_share)
	}

	fn create_digest(&self, random_data: &[u8], shared_secret: &[u8]) -> Vec<u8> {
		let mut mac = HmacSha256::new_from_slice(random_data).expect("HMAC accepts any key size");
		mac.update(shared_secret);
		let mut ret_vec = mac.finalize().into_bytes().to_vec();
		ret_vec.truncate(self.config.digest_length_bytes as usize);
		ret_vec
	}

	fn check_digest(
		&self,
		shares: &[Share],
		shared_secret: &Share,
		proto_share: &Share,
	) -> Result<(), Error> {
		let mut digest_share = self.interpolate(shares, self.config.digest_index, proto_share)?;
		let mut digest = Zeroizing::new(mem::take(&mut digest_share.share_value));
		let random_part = Zeroizing::new(digest.split_off(self.config.digest_length_bytes as usize));
		if *digest != self.create_digest(&random_part, &shared_secret.share_value) {
			return Err(ErrorKind::Digest(
				"Invalid digest of the shared secret".to_string(),
			))?;
		}
		Ok(())
	}
}
