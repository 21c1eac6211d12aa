use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use sigscan::auth::{matches_claimed_address, verify};
use sigscan::types::AppError;

// Well-known development account #0 of hardhat/anvil.
const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const DEV_ADDRESS: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

// personal_sign("hello") by DEV_KEY; recovery id 1, so v = 28.
const HELLO_R_S: &str = "f16ea9a3478698f695fd1401bfe27e9e4a7e8e3da94aa72b021125e31fa899cc573c48ea3fe1d4ab61a9db10c19032026e3ed2dbccba5a178235ac27f9450431";

const UPLOAD_MESSAGE: &str = r#"{"action":"audio_upload","title":"Song","filename":"song.mp3"}"#;
// personal_sign(UPLOAD_MESSAGE) by DEV_KEY; recovery id 0, so v = 27.
const UPLOAD_R_S: &str = "eefa110f21032236771a75eff0b3a1e250c5c657ff3bb3476b46cd10f3aff5522751b8d1cbc8cff0115bf787ed3e74e7be716cfda3f683faa98952bbb549d449";

fn with_v(r_s: &str, v: u8) -> String {
  format!("0x{}{:02x}", r_s, v)
}

fn signature_bytes(signer: &PrivateKeySigner, message: &str) -> [u8; 65] {
  let signature = signer.sign_message_sync(message.as_bytes()).unwrap();
  let mut raw = [0u8; 65];
  raw[..32].copy_from_slice(&signature.r().to_be_bytes::<32>());
  raw[32..64].copy_from_slice(&signature.s().to_be_bytes::<32>());
  raw[64] = signature.v() as u8;
  raw
}

#[test]
fn known_key_recovers_known_address() {
  assert_eq!(verify("hello", &with_v(HELLO_R_S, 28)).unwrap(), DEV_ADDRESS);
  assert_eq!(verify(UPLOAD_MESSAGE, &with_v(UPLOAD_R_S, 27)).unwrap(), DEV_ADDRESS);
}

#[test]
fn legacy_v_and_raw_recovery_id_agree() {
  // 27 <-> 0
  assert_eq!(
    verify(UPLOAD_MESSAGE, &with_v(UPLOAD_R_S, 27)).unwrap(),
    verify(UPLOAD_MESSAGE, &with_v(UPLOAD_R_S, 0)).unwrap()
  );
  // 28 <-> 1
  assert_eq!(
    verify("hello", &with_v(HELLO_R_S, 28)).unwrap(),
    verify("hello", &with_v(HELLO_R_S, 1)).unwrap()
  );
}

#[test]
fn eip155_style_v_recovers_the_same_address() {
  // chain id 1: 37 -> id 0, 38 -> id 1
  assert_eq!(verify(UPLOAD_MESSAGE, &with_v(UPLOAD_R_S, 37)).unwrap(), DEV_ADDRESS);
  assert_eq!(verify("hello", &with_v(HELLO_R_S, 38)).unwrap(), DEV_ADDRESS);
}

#[test]
fn bare_hex_is_accepted() {
  let bare = format!("{}1c", HELLO_R_S);
  assert_eq!(verify("hello", &bare).unwrap(), DEV_ADDRESS);
}

#[test]
fn wrong_recovery_id_yields_a_different_address() {
  let recovered = verify("hello", &with_v(HELLO_R_S, 27));
  // either a different key or no valid point; never the signer
  if let Ok(address) = recovered {
    assert!(!matches_claimed_address(&address, DEV_ADDRESS));
  }
}

#[test]
fn altered_message_does_not_recover_signer() {
  let recovered = verify("hellO", &with_v(HELLO_R_S, 28));
  if let Ok(address) = recovered {
    assert!(!matches_claimed_address(&address, DEV_ADDRESS));
  }
}

#[test]
fn all_zero_signature_is_a_recovery_failure() {
  let zeros = "00".repeat(65);
  assert!(matches!(verify("hello", &zeros), Err(AppError::RecoveryFailed(_))));
}

#[test]
fn any_length_other_than_65_is_rejected() {
  for len in [0usize, 1, 20, 64, 66, 96, 128] {
    for message in ["", "hello", UPLOAD_MESSAGE] {
      let signature = format!("0x{}", "7f".repeat(len));
      assert!(
        matches!(verify(message, &signature), Err(AppError::InvalidSignatureLength(n)) if n == len),
        "len {} message {:?}",
        len,
        message
      );
    }
  }
}

#[test]
fn signer_round_trip() {
  let signers = [DEV_KEY.parse::<PrivateKeySigner>().unwrap(), PrivateKeySigner::random(), PrivateKeySigner::random()];
  let messages = ["hello", "", UPLOAD_MESSAGE, "многобайтовый текст ✓"];

  for signer in &signers {
    let expected = signer.address().to_checksum(None);
    for message in messages {
      let mut raw = signature_bytes(signer, message);

      raw[64] += 27;
      assert_eq!(verify(message, &format!("0x{}", hex::encode(raw))).unwrap(), expected);

      raw[64] -= 27;
      assert_eq!(verify(message, &hex::encode(raw)).unwrap(), expected);
    }
  }
}
