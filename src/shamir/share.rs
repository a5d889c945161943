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

//! Definition of a share, its 10-bit-word serialization, and the
//! conversion to and from the word list

use crate::error::{Error, ErrorKind};
use crate::util::bitpacker::BitPacker;
use crate::util::encrypt::MasterSecretEnc;
use crate::util::rs1024;

use rand::Rng;
use std::collections::HashMap;
use zeroize::{Zeroize, ZeroizeOnDrop};

lazy_static! {
	/// List of slip39 words
	pub static ref WORDLIST: Vec<String> = include_str!("wordlists/en.txt").split_whitespace().map(|s| s.into()).collect();
	pub static ref WORD_INDEX_MAP: HashMap<String, usize> = {
		let mut retval = HashMap::new();
		for (i, item) in WORDLIST.iter().enumerate() {
			retval.insert(item.to_owned(), i);
		}
		retval
	};
}

/// Share-specific configuration values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareConfig {
	/// The length of the random Identifier in bits
	pub id_length_bits: u8,
	/// The number of words in the word list
	pub radix: u16,
	/// The length of the radix in bits
	pub radix_bits: u8,
	/// The length of the random identifier and iteration exponent in words
	pub id_exp_length_words: u8,
	/// The customization string used in the RS1024 checksum and in the PBKDF2 salt
	pub customization_string: Vec<u8>,
	/// The length of the RS1024 checksum in words
	pub checksum_length_words: u8,
	/// The length of the mnemonic in words without the share value
	pub metadata_length_words: u8,
	/// The minimum allowed length of the mnemonic in words
	pub min_mnemonic_length_words: u8,
	/// The length of the iteration exponent in bits
	pub iteration_exp_length_bits: u8,
	/// The maximum number of shares in a group, and of groups
	pub max_share_count: u8,
	/// The minimum allowed entropy of the master secret
	pub min_strength_bits: u16,
}

impl Default for ShareConfig {
	fn default() -> Self {
		let radix_bits = 10;
		let id_length_bits = 15;
		let iteration_exp_length_bits = 5;
		let checksum_length_words = 3;
		let customization_string = b"shamir".to_vec();
		let max_share_count = 16;
		let min_strength_bits = 128;

		// derived values
		let radix = 2u16.pow(u32::from(radix_bits));
		let id_exp_length_words = (id_length_bits + iteration_exp_length_bits) / radix_bits;
		let metadata_length_words = id_exp_length_words + 2 + checksum_length_words;
		let min_mnemonic_length_words =
			metadata_length_words + (f64::from(min_strength_bits) / 10f64).ceil() as u8;

		ShareConfig {
			id_length_bits,
			radix,
			radix_bits,
			id_exp_length_words,
			customization_string,
			checksum_length_words,
			metadata_length_words,
			min_mnemonic_length_words,
			iteration_exp_length_bits,
			max_share_count,
			min_strength_bits,
		}
	}
}

impl ShareConfig {
	/// Just use defaults for now
	pub fn new() -> Self {
		ShareConfig {
			..Default::default()
		}
	}

	/// Minimum allowed share value length in bytes
	pub fn min_strength_bytes(&self) -> usize {
		self.min_strength_bits as usize / 8
	}
}

/// Main definition of a share and its mnemonic serialization.
/// The share value is wiped from memory when the share is dropped,
/// on success and error paths alike.
#[derive(Debug, Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Share {
	/// Random 15 bit value which is the same for all shares and is used to verify
	/// that the shares belong together; it is also used as salt in the encryption
	/// of the master secret. (15 bits)
	pub identifier: u16,
	/// Indicates the total number of iterations to be used in PBKDF2. The number of
	/// iterations is calculated as 10000x2^e. (5 bits)
	pub iteration_exponent: u8,
	/// The x value of the group share (4 bits)
	pub group_index: u8,
	/// indicates how many group shares are needed to reconstruct the master secret.
	/// The value is encoded on the wire as Gt = GT - 1, so a wire value of 0 indicates
	/// that a single group share is needed (GT = 1), a value of 1 indicates that two
	/// group shares are needed (GT = 2) etc. (4 bits)
	pub group_threshold: u8,
	/// indicates the total number of groups. The wire value is encoded as g = G - 1
	/// (4 bits)
	pub group_count: u8,
	/// Member index, or x value of the member share in the given group (4 bits)
	pub member_index: u8,
	/// indicates how many member shares are needed to reconstruct the group share. The
	/// wire value is encoded as t = T − 1. (4 bits)
	pub member_threshold: u8,
	/// corresponds to a list of the SSS part's fk(x) values 1 ≤ k ≤ n. Each fk(x) value is
	/// encoded as a string of eight bits in big-endian order. The concatenation of these
	/// bit strings is the share value. This value is left-padded with "0" bits so that the
	/// length of the padded share value in bits becomes the nearest multiple of 10.
	/// (padding + 8n bits)
	pub share_value: Vec<u8>,
	/// configuration values
	#[zeroize(skip)]
	pub config: ShareConfig,
}

impl Default for Share {
	fn default() -> Self {
		Share {
			identifier: 0,
			iteration_exponent: 0,
			group_index: 0,
			group_threshold: 0,
			group_count: 0,
			member_index: 0,
			member_threshold: 0,
			share_value: vec![],
			config: ShareConfig::new(),
		}
	}
}

impl Share {
	/// Create a new share with a fresh random identifier
	pub fn new<R: Rng>(rng: &mut R) -> Result<Share, Error> {
		let mut s = Share::default();
		s.identifier = s.generate_random_identifier(rng);
		if WORDLIST.len() != s.config.radix as usize {
			return Err(ErrorKind::Config(format!(
				"The wordlist should contain {} words, but it contains {} words.",
				s.config.radix,
				WORDLIST.len()
			)))?;
		}
		Ok(s)
	}

	/// Decode a share from its 10-bit word representation
	pub fn from_words(words: &[u16]) -> Result<Self, Error> {
		let mut s = Share::default();
		s.parse_words(words)?;
		Ok(s)
	}

	/// convenience to create new from a mnemonic word list
	pub fn from_mnemonic(mn: &[String]) -> Result<Self, Error> {
		let mut words = Vec::with_capacity(mn.len());
		for w in mn {
			match WORD_INDEX_MAP.get(w) {
				Some(i) => words.push(*i as u16),
				None => {
					return Err(ErrorKind::Mnemonic(format!(
						"Invalid mnemonic. '{}' is not a valid word.",
						w,
					)))?;
				}
			}
		}
		Share::from_words(&words)
	}

	// create the packed bit array
	fn pack_bits(&self) -> Result<BitPacker, Error> {
		self.check_encodable()?;
		let mut padding_bit_count = self.config.radix_bits
			- (self.share_value.len() * 8 % self.config.radix_bits as usize) as u8;
		if padding_bit_count == self.config.radix_bits {
			padding_bit_count = 0;
		}
		let mut bp = BitPacker::new();

		bp.append_u16(self.identifier, self.config.id_length_bits)?;
		bp.append_u8(
			self.iteration_exponent,
			self.config.iteration_exp_length_bits,
		)?;
		bp.append_u8(self.group_index, 4)?;
		bp.append_u8(self.group_threshold - 1, 4)?;
		bp.append_u8(self.group_count - 1, 4)?;
		bp.append_u8(self.member_index, 4)?;
		bp.append_u8(self.member_threshold - 1, 4)?;
		bp.append_padding(padding_bit_count);
		bp.append_vec_u8(&self.share_value)?;

		if bp.len() % self.config.radix_bits as usize != 0 {
			return Err(ErrorKind::Mnemonic(format!(
				"Incorrect share bit length. Must be a multiple of {}, actual length: {}",
				self.config.radix_bits,
				bp.len(),
			)))?;
		}

		// Create checksum
		let mut sum_data: Vec<u16> = vec![];
		for i in (0..bp.len()).step_by(self.config.radix_bits as usize) {
			sum_data.push(bp.get_u16(i, self.config.radix_bits as usize)?);
		}

		let checksum = rs1024::create_checksum(
			&self.config.customization_string,
			&sum_data,
			self.config.checksum_length_words,
		);

		for c in checksum {
			bp.append_u16(c, self.config.radix_bits)?;
		}

		Ok(bp)
	}

	// metadata fields must fit their wire widths before packing
	fn check_encodable(&self) -> Result<(), Error> {
		let max = self.config.max_share_count;
		if self.identifier >= 1 << self.config.id_length_bits {
			return Err(ErrorKind::Argument(
				"Identifier does not fit in 15 bits".to_string(),
			))?;
		}
		if self.iteration_exponent >= 1 << self.config.iteration_exp_length_bits {
			return Err(ErrorKind::Argument(
				"Iteration exponent does not fit in 5 bits".to_string(),
			))?;
		}
		if self.group_threshold == 0
			|| self.group_count == 0
			|| self.member_threshold == 0
			|| self.group_threshold > max
			|| self.group_count > max
			|| self.member_threshold > max
			|| self.group_index >= max
			|| self.member_index >= max
		{
			return Err(ErrorKind::Argument(format!(
				"Share indices must be below {} and thresholds between 1 and {}",
				max, max,
			)))?;
		}
		Ok(())
	}

	/// Serialize the share as 10-bit words, checksum included
	pub fn to_words(&self) -> Result<Vec<u16>, Error> {
		let bp = self.pack_bits()?;

		let mut ret_vec: Vec<u16> = vec![];
		for i in (0..bp.len()).step_by(self.config.radix_bits as usize) {
			ret_vec.push(bp.get_u16(i, self.config.radix_bits as usize)?);
		}

		Ok(ret_vec)
	}

	/// Convert share data to a share mnemonic
	pub fn to_mnemonic(&self) -> Result<Vec<String>, Error> {
		Ok(self
			.to_words()?
			.iter()
			.map(|d| WORDLIST[*d as usize].to_owned())
			.collect())
	}

	/// Encrypt the share value in place, bound to this share's iteration
	/// exponent and identifier
	pub fn encrypt(&mut self, passphrase: &str) -> Result<(), Error> {
		let enc = MasterSecretEnc::new()?;
		let value = enc.encrypt(
			&self.share_value,
			passphrase,
			self.iteration_exponent,
			self.identifier,
		);
		self.share_value.zeroize();
		self.share_value = value;
		Ok(())
	}

	/// Inverse of `encrypt`
	pub fn decrypt(&mut self, passphrase: &str) -> Result<(), Error> {
		let enc = MasterSecretEnc::new()?;
		let value = enc.decrypt(
			&self.share_value,
			passphrase,
			self.iteration_exponent,
			self.identifier,
		);
		self.share_value.zeroize();
		self.share_value = value;
		Ok(())
	}

	fn parse_words(&mut self, words: &[u16]) -> Result<(), Error> {
		if words.len() < self.config.min_mnemonic_length_words as usize {
			return Err(ErrorKind::NotEnoughMnemonicWords(
				self.config.min_mnemonic_length_words,
			))?;
		}
		for w in words {
			if *w >= self.config.radix {
				return Err(ErrorKind::Mnemonic(format!(
					"Invalid mnemonic word value {}. Words are 10 bits wide.",
					w,
				)))?;
			}
		}

		rs1024::verify_checksum(&self.config.customization_string, words)?;

		let mut bp = BitPacker::new();
		for w in words {
			bp.append_u16(*w, self.config.radix_bits)?;
		}

		self.identifier = bp.get_u16(0, self.config.id_length_bits as usize)?;
		self.iteration_exponent = bp.get_u8(
			self.config.id_length_bits as usize,
			self.config.iteration_exp_length_bits as usize,
		)?;
		self.group_index = bp.get_u8(20, 4)?;
		self.group_threshold = bp.get_u8(24, 4)? + 1;
		self.group_count = bp.get_u8(28, 4)? + 1;
		self.member_index = bp.get_u8(32, 4)?;
		self.member_threshold = bp.get_u8(36, 4)? + 1;

		if self.group_count < self.group_threshold {
			return Err(ErrorKind::InvalidMnemonicGroupThreshold)?;
		}

		// a valid payload is a whole number of bytes plus under-byte padding
		if (self.config.radix_bits as usize
			* (words.len() - self.config.metadata_length_words as usize))
			% 16 > 8
		{
			return Err(ErrorKind::InvalidSecretLength)?;
		}

		// remove padding and recover the share value
		bp.split_out(
			40,
			bp.len() - self.config.radix_bits as usize * self.config.checksum_length_words as usize,
		);
		bp.remove_padding(bp.len() % 16)?;

		self.share_value = bp.get_vec_u8(0, bp.len() / 8)?;

		if self.share_value.len() < self.config.min_strength_bytes() {
			return Err(ErrorKind::SecretTooShort(
				self.config.min_strength_bits / 8,
			))?;
		}
		if self.share_value.len() % 2 != 0 {
			return Err(ErrorKind::InvalidSecretLength)?;
		}

		Ok(())
	}

	fn generate_random_identifier<R: Rng>(&self, rng: &mut R) -> u16 {
		let retval: u16 = rng.gen();
		retval & ((1 << self.config.id_length_bits) - 1)
	}
}

/// Encode a share into its mnemonic word-index representation,
/// metadata first, then the share value, then the checksum
pub fn encode_mnemonic(share: &Share) -> Result<Vec<u16>, Error> {
	share.to_words()
}

/// Decode a word-index mnemonic back into a share
pub fn decode_mnemonic(words: &[u16]) -> Result<Share, Error> {
	Share::from_words(words)
}

#[cfg(test)]
mod tests {
	use super::*;

	use crate::error::{Error, ErrorKind};

	fn reference_share() -> Share {
		Share {
			identifier: 21219,
			iteration_exponent: 0,
			group_index: 0,
			group_threshold: 1,
			group_count: 1,
			member_index: 4,
			member_threshold: 3,
			share_value: b"\x84\x06\xce\xa0p\xbfe~\rA\x01\t5\xaf\xd3Z".to_vec(),
			config: ShareConfig::new(),
		}
	}

	// Reference word values taken from the python implementation
	fn reference_words() -> Vec<u16> {
		vec![
			663, 96, 0, 66, 132, 27, 234, 28, 191, 405, 992, 848, 257, 36, 858, 1012, 858, 1001,
			340, 369,
		]
	}

	#[test]
	fn share_to_words() -> Result<(), Error> {
		let share = reference_share();
		let words = share.to_words()?;
		assert_eq!(words, reference_words());

		let dec_share = Share::from_words(&words)?;
		assert_eq!(share, dec_share);
		Ok(())
	}

	#[test]
	fn share_to_mnemonic() -> Result<(), Error> {
		// Test vectors taken from python reference implementation
		let expected_res: Vec<String> = vec![
			"phantom".into(),
			"branch".into(),
			"academic".into(),
			"axle".into(),
			"ceramic".into(),
			"alien".into(),
			"domain".into(),
			"alive".into(),
			"deadline".into(),
			"gray".into(),
			"walnut".into(),
			"spend".into(),
			"echo".into(),
			"amount".into(),
			"squeeze".into(),
			"woman".into(),
			"squeeze".into(),
			"welfare".into(),
			"filter".into(),
			"frequent".into(),
		];
		let share = reference_share();
		let m = share.to_mnemonic()?;
		assert_eq!(expected_res, m);

		let dec_share = Share::from_mnemonic(&m)?;
		assert_eq!(share, dec_share);
		Ok(())
	}

	#[test]
	fn header_word_layout() -> Result<(), Error> {
		let share = Share {
			identifier: 0x5b1f,
			iteration_exponent: 2,
			group_index: 3,
			group_threshold: 2,
			group_count: 5,
			member_index: 7,
			member_threshold: 2,
			share_value: vec![0u8; 16],
			config: ShareConfig::new(),
		};
		let words = share.to_words()?;
		// [ id hi 10 ][ id lo 5 | e 5 ][ GI 4 | GT-1 4 | (g-1) hi 2 ][ (g-1) lo 2 | I 4 | T-1 4 ]
		let id = u32::from(share.identifier);
		assert_eq!(u32::from(words[0]), (id >> 5) & 0x3ff);
		assert_eq!(
			u32::from(words[1]),
			((id << 5) | u32::from(share.iteration_exponent)) & 0x3ff
		);
		assert_eq!(u32::from(words[2]), ((3 << 6) | ((2 - 1) << 2) | ((5 - 1) >> 2)) & 0x3ff);
		assert_eq!(
			u32::from(words[3]),
			(((5u32 - 1) << 8) | (7 << 4) | (2 - 1)) & 0x3ff
		);
		// 7 metadata words plus ceil(8 * 16 / 10)
		assert_eq!(words.len(), 7 + 13);
		Ok(())
	}

	#[test]
	fn decode_not_enough_words() {
		let words = reference_words();
		let res = Share::from_words(&words[..19]);
		assert_eq!(
			res.err().unwrap().kind(),
			ErrorKind::NotEnoughMnemonicWords(20)
		);
	}

	#[test]
	fn decode_bad_checksum() {
		for i in 0..20 {
			let mut words = reference_words();
			words[i] ^= 0x08;
			let res = Share::from_words(&words);
			assert_eq!(
				res.err().unwrap().kind(),
				ErrorKind::InvalidMnemonicChecksum
			);
		}
	}

	#[test]
	fn decode_group_threshold_above_count() {
		// rebuild the reference words with GT-1 = 3, g-1 = 0 and a fresh checksum
		let mut words = reference_words();
		words[2] = (words[2] & !0x3c) | (3 << 2);
		let checksum = rs1024::create_checksum(b"shamir", &words[..17], 3);
		words[17..].copy_from_slice(&checksum);
		let res = Share::from_words(&words);
		assert_eq!(
			res.err().unwrap().kind(),
			ErrorKind::InvalidMnemonicGroupThreshold
		);
	}

	#[test]
	fn decode_nonzero_padding() {
		// set a padding bit (top bit of the first value word) and re-checksum
		let mut words = reference_words();
		words[4] |= 0x200;
		let checksum = rs1024::create_checksum(b"shamir", &words[..17], 3);
		words[17..].copy_from_slice(&checksum);
		let res = Share::from_words(&words);
		assert_eq!(res.err().unwrap().kind(), ErrorKind::Padding);
	}

	#[test]
	fn encrypt_decrypt_share_value() -> Result<(), Error> {
		let mut share = reference_share();
		let plain = share.share_value.clone();
		share.encrypt("TREZOR")?;
		assert_ne!(share.share_value, plain);
		assert_eq!(share.share_value.len(), plain.len());
		share.decrypt("TREZOR")?;
		assert_eq!(share.share_value, plain);
		Ok(())
	}

	#[test]
	fn unencodable_share_rejected() {
		let mut share = reference_share();
		share.group_threshold = 0;
		assert!(share.to_words().is_err());
		let mut share = reference_share();
		share.member_index = 16;
		assert!(share.to_words().is_err());
		let mut share = reference_share();
		share.identifier = 1 << 15;
		assert!(share.to_words().is_err());
	}
}
