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

//! Functions and structs that specifically define the SLIP-0039 scheme:
//! the two-level split of a master secret into group and member shares,
//! and the inverse recovery

use super::share::ShareConfig;
use super::{Share, Splitter};
use crate::error::{Error, ErrorKind};

use rand::{thread_rng, Rng};
use std::collections::BTreeMap;
use std::fmt;
use zeroize::Zeroizing;

use crate::util;
use crate::util::encrypt::MasterSecretEnc;

/// Requested shape of one group, as input to generation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupDescriptor {
	/// number of members required to reconstruct the group share
	pub member_threshold: u8,
	/// number of member shares to generate for the group
	pub member_count: u8,
	/// optional per-member share passwords, one slot per member
	pub member_passwords: Option<Vec<Option<String>>>,
}

impl GroupDescriptor {
	/// A group without per-member passwords
	pub fn new(member_threshold: u8, member_count: u8) -> Result<Self, Error> {
		let g = GroupDescriptor {
			member_threshold,
			member_count,
			member_passwords: None,
		};
		g.validate(0)?;
		Ok(g)
	}

	/// A group whose members are individually password-protected;
	/// empty slots are left unencrypted
	pub fn with_passwords(
		member_threshold: u8,
		member_count: u8,
		member_passwords: Vec<Option<String>>,
	) -> Result<Self, Error> {
		let g = GroupDescriptor {
			member_threshold,
			member_count,
			member_passwords: Some(member_passwords),
		};
		g.validate(0)?;
		Ok(g)
	}

	fn validate(&self, group_index: u8) -> Result<(), Error> {
		if self.member_threshold == 0 || self.member_threshold > self.member_count {
			return Err(ErrorKind::InvalidGroupThreshold(format!(
				"group {}: member threshold {} must be between 1 and the member count {}",
				group_index, self.member_threshold, self.member_count,
			)))?;
		}
		if self.member_threshold == 1 && self.member_count > 1 {
			return Err(ErrorKind::InvalidSingletonMember(group_index))?;
		}
		if let Some(passwords) = &self.member_passwords {
			if passwords.len() != self.member_count as usize {
				return Err(ErrorKind::Argument(format!(
					"group {}: expected one password slot per member ({}), got {}",
					group_index,
					self.member_count,
					passwords.len(),
				)))?;
			}
			for p in passwords.iter().flatten() {
				check_passphrase(p)?;
			}
		}
		Ok(())
	}
}

/// Struct for returned shares
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupShare {
	/// Group id
	pub group_id: u16,
	/// iteration exponent
	pub iteration_exponent: u8,
	/// group index
	pub group_index: u8,
	/// group threshold
	pub group_threshold: u8,
	/// number of group shares
	pub group_count: u8,
	/// member threshold:
	pub member_threshold: u8,
	/// Member shares for the group
	pub member_shares: Vec<Share>,
}

impl fmt::Display for GroupShare {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(
			f,
			"Group {} of {} - {} of {} shares required: ",
			self.group_index + 1,
			self.group_count,
			self.member_threshold,
			self.member_shares.len()
		)?;
		for s in &self.member_shares {
			for w in s.to_mnemonic().map_err(|_| fmt::Error)? {
				write!(f, "{} ", w)?;
			}
			writeln!(f)?;
		}
		Ok(())
	}
}

impl GroupShare {
	/// return list of mnemonics
	pub fn mnemonic_list(&self) -> Result<Vec<Vec<String>>, Error> {
		let mut ret_vec = vec![];
		for s in &self.member_shares {
			ret_vec.push(s.to_mnemonic()?);
		}
		Ok(ret_vec)
	}

	/// return list of mnemonics as space separated strings
	pub fn mnemonic_list_flat(&self) -> Result<Vec<String>, Error> {
		let mut ret_vec = vec![];
		for s in &self.member_shares {
			ret_vec.push(s.to_mnemonic()?.iter().fold(String::new(), |mut acc, s| {
				acc.push_str(s);
				acc.push(' ');
				acc
			}))
		}
		Ok(ret_vec)
	}

	/// return list of mnemonics in 10-bit word-index form
	pub fn word_list(&self) -> Result<Vec<Vec<u16>>, Error> {
		let mut ret_vec = vec![];
		for s in &self.member_shares {
			ret_vec.push(s.to_words()?);
		}
		Ok(ret_vec)
	}

	/// decode member shares to single share
	pub fn decode_shares(&mut self) -> Result<Share, Error> {
		let sp = Splitter::new(None);
		sp.recover_secret(&self.member_shares, self.member_threshold)
	}
}

/// Split a master secret into mnemonic shares.
/// group_threshold: The number of groups required to reconstruct the master secret,
/// groups: the shape of each group to generate,
/// master_secret: The master secret to split,
/// passphrase: The passphrase used to encrypt the master secret,
/// iteration_exponent: The PBKDF2 work factor, iterations are 10000x2^e.
/// return: shares for each group, in (group_index, member_index) order.
pub fn generate_mnemonics(
	group_threshold: u8,
	groups: &[GroupDescriptor],
	master_secret: &[u8],
	passphrase: &str,
	iteration_exponent: u8,
) -> Result<Vec<GroupShare>, Error> {
	generate_mnemonics_with_rng(
		group_threshold,
		groups,
		master_secret,
		passphrase,
		iteration_exponent,
		&mut thread_rng(),
	)
}

/// As [`generate_mnemonics`], drawing the identifier and the split
/// coefficients from the given random source
pub fn generate_mnemonics_with_rng<R: Rng>(
	group_threshold: u8,
	groups: &[GroupDescriptor],
	master_secret: &[u8],
	passphrase: &str,
	iteration_exponent: u8,
	rng: &mut R,
) -> Result<Vec<GroupShare>, Error> {
	let config = ShareConfig::new();

	if master_secret.len() * 8 < config.min_strength_bits as usize {
		return Err(ErrorKind::SecretTooShort(config.min_strength_bits / 8))?;
	}

	if groups.is_empty() || groups.len() > config.max_share_count as usize {
		return Err(ErrorKind::Argument(format!(
			"Number of groups must be between 1 and {}",
			config.max_share_count,
		)))?;
	}

	for (i, g) in groups.iter().enumerate() {
		g.validate(i as u8)?;
	}

	if master_secret.len() % 2 != 0 {
		return Err(ErrorKind::InvalidSecretLength)?;
	}

	check_passphrase(passphrase)?;

	if group_threshold == 0 || group_threshold as usize > groups.len() {
		return Err(ErrorKind::InvalidGroupThreshold(format!(
			"the group threshold ({}) must be between 1 and the number of groups ({})",
			group_threshold,
			groups.len()
		)))?;
	}

	if iteration_exponent >= 1 << config.iteration_exp_length_bits {
		return Err(ErrorKind::Argument(
			"Iteration exponent does not fit in 5 bits".to_string(),
		))?;
	}

	// proto share carries the metadata common to the whole share set
	let mut proto_share = Share::new(rng)?;
	proto_share.iteration_exponent = iteration_exponent;
	proto_share.group_threshold = group_threshold;
	proto_share.group_count = groups.len() as u8;

	let encoder = MasterSecretEnc::new()?;
	let encrypted_master_secret = Zeroizing::new(encoder.encrypt(
		master_secret,
		passphrase,
		iteration_exponent,
		proto_share.identifier,
	));

	let sp = Splitter::new(None);

	let group_shares = sp.split_secret(
		&proto_share,
		group_threshold,
		groups.len() as u8,
		&encrypted_master_secret,
		rng,
	)?;

	let mut retval: Vec<GroupShare> = vec![];

	let gs_len = group_shares.len();
	for (i, elem) in group_shares.into_iter().enumerate() {
		proto_share.group_index = i as u8;
		let group = &groups[i];
		let mut member_shares = sp.split_secret(
			&proto_share,
			group.member_threshold,
			group.member_count,
			&elem.share_value,
			rng,
		)?;
		if let Some(passwords) = &group.member_passwords {
			for (j, ms) in member_shares.iter_mut().enumerate() {
				if let Some(p) = &passwords[j] {
					ms.encrypt(p)?;
				}
			}
		}
		for ms in &member_shares {
			if ms.share_value.len() != master_secret.len() {
				return Err(ErrorKind::InvalidShareSet(
					"All shares must encode to the same length".to_string(),
				))?;
			}
		}
		retval.push(GroupShare {
			group_id: proto_share.identifier,
			iteration_exponent,
			group_index: i as u8,
			group_threshold,
			group_count: gs_len as u8,
			member_threshold: group.member_threshold,
			member_shares,
		});
	}

	Ok(retval)
}

/// Generate a fresh random master secret of the given strength and split it
pub fn generate_mnemonics_random(
	group_threshold: u8,
	groups: &[GroupDescriptor],
	strength_bits: u16,
	passphrase: &str,
	iteration_exponent: u8,
) -> Result<Vec<GroupShare>, Error> {
	let config = ShareConfig::new();
	if strength_bits < config.min_strength_bits {
		return Err(ErrorKind::SecretTooShort(config.min_strength_bits / 8))?;
	}
	if strength_bits % 16 != 0 {
		return Err(ErrorKind::InvalidSecretLength)?;
	}
	let mut rng = thread_rng();
	let master_secret = Zeroizing::new(util::fill_vec_rand(
		strength_bits as usize / 8,
		&mut rng,
	));
	generate_mnemonics_with_rng(
		group_threshold,
		groups,
		&master_secret,
		passphrase,
		iteration_exponent,
		&mut rng,
	)
}

/// Combines mnemonic shares to obtain the master secret which was previously
/// split using Shamir's secret sharing scheme.
/// mnemonics: List of mnemonics, in any order.
/// passphrase: The passphrase used to encrypt the master secret.
/// return: The master secret.
pub fn combine_mnemonics(mnemonics: &[Vec<String>], passphrase: &str) -> Result<Vec<u8>, Error> {
	let shares = decode_string_mnemonics(mnemonics)?;
	combine_shares(shares, passphrase, None)
}

/// As [`combine_mnemonics`], first stripping per-share passwords;
/// one password slot per supplied mnemonic
pub fn combine_mnemonics_with_passwords(
	mnemonics: &[Vec<String>],
	passphrase: &str,
	passwords: &[Option<String>],
) -> Result<Vec<u8>, Error> {
	let shares = decode_string_mnemonics(mnemonics)?;
	combine_shares(shares, passphrase, Some(passwords))
}

/// Combine mnemonics supplied in 10-bit word-index form
pub fn combine_word_mnemonics(
	mnemonics: &[Vec<u16>],
	passphrase: &str,
) -> Result<Vec<u8>, Error> {
	let shares = decode_word_mnemonics(mnemonics)?;
	combine_shares(shares, passphrase, None)
}

/// As [`combine_word_mnemonics`], with per-share passwords
pub fn combine_word_mnemonics_with_passwords(
	mnemonics: &[Vec<u16>],
	passphrase: &str,
	passwords: &[Option<String>],
) -> Result<Vec<u8>, Error> {
	let shares = decode_word_mnemonics(mnemonics)?;
	combine_shares(shares, passphrase, Some(passwords))
}

fn decode_string_mnemonics(mnemonics: &[Vec<String>]) -> Result<Vec<Share>, Error> {
	if mnemonics.is_empty() {
		return Err(ErrorKind::EmptyMnemonicSet)?;
	}
	let check_len = mnemonics[0].len();
	let mut shares = vec![];
	for m in mnemonics {
		if m.len() != check_len {
			return Err(ErrorKind::InvalidShareSet(
				"All mnemonics must have the same length".to_string(),
			))?;
		}
		shares.push(Share::from_mnemonic(m)?);
	}
	Ok(shares)
}

fn decode_word_mnemonics(mnemonics: &[Vec<u16>]) -> Result<Vec<Share>, Error> {
	if mnemonics.is_empty() {
		return Err(ErrorKind::EmptyMnemonicSet)?;
	}
	let check_len = mnemonics[0].len();
	let mut shares = vec![];
	for m in mnemonics {
		if m.len() != check_len {
			return Err(ErrorKind::InvalidShareSet(
				"All mnemonics must have the same length".to_string(),
			))?;
		}
		shares.push(Share::from_words(m)?);
	}
	Ok(shares)
}

/// Sort decoded shares into groups, enforce cross-share consistency and run
/// the two-level recovery
fn combine_shares(
	mut shares: Vec<Share>,
	passphrase: &str,
	passwords: Option<&[Option<String>]>,
) -> Result<Vec<u8>, Error> {
	if let Some(passwords) = passwords {
		if passwords.len() != shares.len() {
			return Err(ErrorKind::Argument(format!(
				"expected one password slot per mnemonic ({}), got {}",
				shares.len(),
				passwords.len(),
			)))?;
		}
		for (s, p) in shares.iter_mut().zip(passwords.iter()) {
			if let Some(p) = p {
				s.decrypt(p)?;
			}
		}
	}

	// all shares of one split agree on the leading metadata
	let check_share = shares[0].clone();
	for s in shares.iter() {
		if s.identifier != check_share.identifier
			|| s.iteration_exponent != check_share.iteration_exponent
		{
			return Err(ErrorKind::InvalidShareSet(format!(
				"All mnemonics must begin with the same {} words (identifier and iteration \
				 exponent must be the same)",
				s.config.id_exp_length_words,
			)))?;
		}
		if s.group_threshold != check_share.group_threshold {
			return Err(ErrorKind::InvalidShareSet(
				"All mnemonics must have the same group threshold".to_string(),
			))?;
		}
		if s.group_count != check_share.group_count {
			return Err(ErrorKind::InvalidShareSet(
				"All mnemonics must have the same group count".to_string(),
			))?;
		}
		if s.share_value.len() != check_share.share_value.len() {
			return Err(ErrorKind::InvalidShareSet(
				"All share values must have the same length".to_string(),
			))?;
		}
	}

	let mut group_index_map: BTreeMap<u8, GroupShare> = BTreeMap::new();

	for s in shares {
		let group_index = s.group_index;
		match group_index_map.get_mut(&group_index) {
			Some(e) => {
				if e.member_threshold != s.member_threshold {
					return Err(ErrorKind::InvalidMemberThreshold(group_index))?;
				}
				if e.member_shares.iter().any(|m| m.member_index == s.member_index) {
					return Err(ErrorKind::DuplicateMemberIndex(
						group_index,
						s.member_index,
					))?;
				}
				e.member_shares.push(s);
			}
			None => {
				let group_share = GroupShare {
					group_id: s.identifier,
					group_index,
					group_threshold: s.group_threshold,
					iteration_exponent: s.iteration_exponent,
					group_count: s.group_count,
					member_threshold: s.member_threshold,
					member_shares: vec![s],
				};
				group_index_map.insert(group_index, group_share);
			}
		}
	}

	if group_index_map.len() < check_share.group_threshold as usize {
		return Err(ErrorKind::NotEnoughGroups(
			group_index_map.len() as u8,
			check_share.group_threshold,
		))?;
	}

	for g in group_index_map.values() {
		if g.member_shares.len() < g.member_threshold as usize {
			return Err(ErrorKind::NotEnoughMemberShares(
				g.group_index,
				g.member_threshold,
			))?;
		}
	}

	// recover each group secret, re-indexed for the group-level recovery
	let mut group_level_shares: Vec<Share> = vec![];
	for (group_index, mut g) in group_index_map.into_iter() {
		let mut group_secret = g.decode_shares()?;
		group_secret.member_index = group_index;
		group_level_shares.push(group_secret);
	}

	let sp = Splitter::new(None);
	let ems = sp.recover_secret(&group_level_shares, check_share.group_threshold)?;

	let encoder = MasterSecretEnc::new()?;
	let dms = encoder.decrypt(
		&ems.share_value,
		passphrase,
		ems.iteration_exponent,
		ems.identifier,
	);
	Ok(dms)
}

/// All passphrase bytes must be printable ASCII (32..126)
fn check_passphrase(passphrase: &str) -> Result<(), Error> {
	for b in passphrase.bytes() {
		if !(32..=126).contains(&b) {
			return Err(ErrorKind::InvalidPassphrase)?;
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn flatten_mnemonics(nms: &[GroupShare]) -> Result<Vec<Vec<String>>, Error> {
		let mut ret = vec![];
		for m in nms {
			for s in m.member_shares.iter() {
				ret.push(s.to_mnemonic()?);
			}
		}
		Ok(ret)
	}

	fn group_descriptors(shapes: &[(u8, u8)]) -> Vec<GroupDescriptor> {
		shapes
			.iter()
			.map(|(t, c)| GroupDescriptor::new(*t, *c).unwrap())
			.collect()
	}

	#[test]
	fn generate_mnemonics_test() -> Result<(), Error> {
		let master_secret = b"\x0c\x94\x90\xbcn\xd6\xbc\xbf\xac>\xbe}\xeeV\xf2P".to_vec();

		// single 3 of 5 test, splat out all mnemonics
		let mns = generate_mnemonics(1, &group_descriptors(&[(3, 5)]), &master_secret, "", 0)?;
		let result = combine_mnemonics(&flatten_mnemonics(&mns)?, "")?;
		assert_eq!(result, master_secret);

		// Test a few distinct groups
		let mns = generate_mnemonics(
			2,
			&group_descriptors(&[(3, 5), (2, 5), (3, 3), (13, 16)]),
			&master_secret,
			"",
			0,
		)?;
		let result = combine_mnemonics(&flatten_mnemonics(&mns)?, "")?;
		assert_eq!(result, master_secret);

		// work through some varying sized secrets
		let mut master_secret = b"\x0c\x94\x90\xbcn\xd6\xbc\xbf\xac>\xbe}\xeeV\xf2P".to_vec();
		for _ in 0..8 {
			master_secret.push(0);
			master_secret.push(1);

			let mns = generate_mnemonics(1, &group_descriptors(&[(3, 5)]), &master_secret, "", 0)?;
			let result = combine_mnemonics(&flatten_mnemonics(&mns)?, "")?;
			assert_eq!(result, master_secret);
		}

		// Test case for particular case which failed with different threshold lengths
		let one = "slavery flea acrobat eclipse cultural emission yield invasion seafood says insect square bucket orbit leaves closet heat ugly database decorate";
		let two = "slavery flea acrobat emerald aviation escape year axle method forget rebound burden museum game suitable brave texture deploy together flash";
		let three = "slavery flea acrobat envelope best ceiling dragon threaten isolate headset decrease organize crunch fiction sniff carbon museum username glasses plunge";
		let four = "slavery flea beard echo cradle rebound penalty minister literary object have hazard elephant meaning enemy empty result capture peanut believe";
		let five = "slavery flea beard email blind lips evaluate repair decent rich mortgage swimming branch decision unkind ultimate military sugar prepare airport";
		// 2 groups of 2 required, group 0 is 3-of-n and group 1 is 2-of-n
		let mut input: Vec<Vec<String>> = vec![];
		input.push(one.split(' ').map(|s| s.to_owned()).collect());
		input.push(two.split(' ').map(|s| s.to_owned()).collect());
		input.push(three.split(' ').map(|s| s.to_owned()).collect());
		input.push(four.split(' ').map(|s| s.to_owned()).collect());
		input.push(five.split(' ').map(|s| s.to_owned()).collect());
		let _result = combine_mnemonics(&input, "TREZOR")?;

		// group 0 short of its member threshold
		let partial = vec![
			input[0].clone(),
			input[1].clone(),
			input[3].clone(),
			input[4].clone(),
		];
		let e = combine_mnemonics(&partial, "TREZOR").unwrap_err();
		assert_eq!(e.kind(), ErrorKind::NotEnoughMemberShares(0, 3));

		// group 1 missing entirely
		let partial = vec![input[0].clone(), input[1].clone(), input[2].clone()];
		let e = combine_mnemonics(&partial, "TREZOR").unwrap_err();
		assert_eq!(e.kind(), ErrorKind::NotEnoughGroups(1, 2));

		Ok(())
	}

	#[test]
	fn combine_known_vector() -> Result<(), Error> {
		// 3 of 5 share set over the ascii master secret below, generated with
		// an iteration exponent of 0 and an empty passphrase
		let one = "ending senior academic acne acne lizard armed wrist fancy center blimp broken branch ceiling type bishop senior window mother dominant humidity kidney flip leader cover pupal swimming quarter findings picture much impulse answer threaten bishop express brother sharp unwrap bulge leaves guest ladybug imply thumb dress brave orbit orbit garbage vexed brave deploy tofu regular unusual hunting carbon year";
		let two = "ending senior academic agree acid grill magazine trip impact diagnose headset year puny adorn swimming knife aquatic airline prayer hairy unfold forbid diminish sweater brave column holy spit superior replace script oasis firefly scared goat divorce oral laundry violence merit golden founder unusual taste preach ruin lying bumpy single glasses fitness argue daisy secret loud squeeze theater husky already";
		let three = "ending senior academic amazing academic carbon sheriff march ordinary advocate climate quarter explain view glasses distance scandal modify maiden welcome include webcam snapshot lilac finance faint facility quantity daughter trash formal failure execute grasp necklace trust bishop privacy library infant slim envy parcel boring mixture deploy dough deny patrol evening brave idea blessing slush lizard woman teaspoon news exclude";
		let four = "ending senior academic arcade acquire work exceed network revenue blanket force fiber ting standard fatigue extend acid holiday raspy pink vegan survive river step golden scandal tendency spray parcel vintage amuse remove best else unknown overall mild breathe nuclear wrist criminal jury deal rescue symbolic slow predator railroad verify involve require graduate ambition unknown repair scandal hobo voice railroad";
		let five = "ending senior academic axle acquire golden velvet depart swing endorse champion estate slush alien burning painting obesity surprise punish gasoline elephant educate declare rebuild plains making unkind carve exotic unfold counter cowboy extra fantasy cleanup pickup increase type deliver together fumes nylon acrobat fatigue listen elder toxic losing paper image aide satisfy award axis evoke capital academic violence canyon";
		let mut input: Vec<Vec<String>> = vec![];
		input.push(one.split(' ').map(|s| s.to_owned()).collect());
		input.push(two.split(' ').map(|s| s.to_owned()).collect());
		input.push(three.split(' ').map(|s| s.to_owned()).collect());
		input.push(four.split(' ').map(|s| s.to_owned()).collect());
		input.push(five.split(' ').map(|s| s.to_owned()).collect());
		let result = combine_mnemonics(&input, "")?;
		assert_eq!(
			result,
			b"fdd99010e03f3141662adb33644d5fd2bea0238fa805a2d21e396a22b926558c".to_vec()
		);
		Ok(())
	}

	#[test]
	fn member_passwords_round_trip() -> Result<(), Error> {
		let master_secret = b"\x0c\x94\x90\xbcn\xd6\xbc\xbf\xac>\xbe}\xeeV\xf2P".to_vec();
		let groups = vec![GroupDescriptor::with_passwords(
			2,
			3,
			vec![
				Some("alpha pw".to_string()),
				None,
				Some("charlie pw".to_string()),
			],
		)?];
		let mns = generate_mnemonics(1, &groups, &master_secret, "", 0)?;
		let mnemonics = mns[0].mnemonic_list()?;

		// members 0 and 2 with their passwords
		let result = combine_mnemonics_with_passwords(
			&[mnemonics[0].clone(), mnemonics[2].clone()],
			"",
			&[
				Some("alpha pw".to_string()),
				Some("charlie pw".to_string()),
			],
		)?;
		assert_eq!(result, master_secret);

		// members 0 and 1, only 0 needs a password
		let result = combine_mnemonics_with_passwords(
			&[mnemonics[0].clone(), mnemonics[1].clone()],
			"",
			&[Some("alpha pw".to_string()), None],
		)?;
		assert_eq!(result, master_secret);

		// same again in word-index form
		let words = mns[0].word_list()?;
		let result = combine_word_mnemonics_with_passwords(
			&[words[0].clone(), words[1].clone()],
			"",
			&[Some("alpha pw".to_string()), None],
		)?;
		assert_eq!(result, master_secret);

		// dropping the password leaves an inconsistent share set
		assert!(combine_mnemonics(
			&[mnemonics[0].clone(), mnemonics[1].clone()],
			""
		)
		.is_err());
		Ok(())
	}

	#[test]
	fn generate_precondition_errors() {
		let secret_16 = vec![7u8; 16];
		let groups = group_descriptors(&[(2, 3)]);

		let e = generate_mnemonics(1, &groups, &vec![7u8; 14], "", 0).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::SecretTooShort(16));

		let e = generate_mnemonics(1, &groups, &vec![7u8; 17], "", 0).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::InvalidSecretLength);

		let e = generate_mnemonics(1, &groups, &secret_16, "caf\u{00e9}", 0).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::InvalidPassphrase);

		let e = generate_mnemonics(2, &groups, &secret_16, "", 0).unwrap_err();
		assert!(matches!(e.kind(), ErrorKind::InvalidGroupThreshold(_)));

		let bad_group = GroupDescriptor {
			member_threshold: 4,
			member_count: 3,
			member_passwords: None,
		};
		let e = generate_mnemonics(1, &[bad_group], &secret_16, "", 0).unwrap_err();
		assert!(matches!(e.kind(), ErrorKind::InvalidGroupThreshold(_)));

		let singleton = GroupDescriptor {
			member_threshold: 1,
			member_count: 3,
			member_passwords: None,
		};
		let e = generate_mnemonics(1, &[singleton], &secret_16, "", 0).unwrap_err();
		assert_eq!(e.kind(), ErrorKind::InvalidSingletonMember(0));
	}

	#[test]
	fn random_master_secret_round_trip() -> Result<(), Error> {
		let mns = generate_mnemonics_random(1, &group_descriptors(&[(2, 3)]), 128, "", 0)?;
		assert_eq!(mns.len(), 1);
		assert_eq!(mns[0].member_shares.len(), 3);
		let mnemonics = flatten_mnemonics(&mns)?;
		// different authorised subsets agree on the recovered secret
		let a = combine_mnemonics(&mnemonics[..2].to_vec(), "")?;
		let b = combine_mnemonics(&mnemonics[1..].to_vec(), "")?;
		assert_eq!(a, b);
		assert_eq!(a.len(), 16);

		assert!(matches!(
			generate_mnemonics_random(1, &group_descriptors(&[(2, 3)]), 64, "", 0)
				.unwrap_err()
				.kind(),
			ErrorKind::SecretTooShort(_)
		));
		assert_eq!(
			generate_mnemonics_random(1, &group_descriptors(&[(2, 3)]), 136, "", 0)
				.unwrap_err()
				.kind(),
			ErrorKind::InvalidSecretLength
		);
		Ok(())
	}

	#[test]
	fn flat_mnemonic_rendering() -> Result<(), Error> {
		let master_secret = b"\x0c\x94\x90\xbcn\xd6\xbc\xbf\xac>\xbe}\xeeV\xf2P".to_vec();
		let mns = generate_mnemonics(1, &group_descriptors(&[(2, 2)]), &master_secret, "", 0)?;
		let flat = mns[0].mnemonic_list_flat()?;
		let lists = mns[0].mnemonic_list()?;
		assert_eq!(flat.len(), lists.len());
		for (f, l) in flat.iter().zip(lists.iter()) {
			let rejoined: Vec<String> = f.split_whitespace().map(|s| s.to_owned()).collect();
			assert_eq!(&rejoined, l);
		}
		Ok(())
	}

	#[test]
	fn combine_empty_set() {
		let e = combine_mnemonics(&[], "").unwrap_err();
		assert_eq!(e.kind(), ErrorKind::EmptyMnemonicSet);
		let e = combine_word_mnemonics(&[], "").unwrap_err();
		assert_eq!(e.kind(), ErrorKind::EmptyMnemonicSet);
	}
}
