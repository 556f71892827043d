use node_config::{CertificateStoreSupplier, ConfigError, MutualSslConfiguration, SslConfiguration, SslOptions,
                  DEFAULT_SSL_HANDSHAKE_TIMEOUT};

fn store(name: &str) -> CertificateStoreSupplier {
  CertificateStoreSupplier::new(format!("certificates/{}.jks", name), "cordacadevpass", "cordacadevkeypass")
}

#[test]
fn mutual_defaults_to_no_openssl() {
  let m = SslConfiguration::mutual(store("sslkeystore"), store("truststore"));
  assert!(!m.use_open_ssl());
  assert_eq!(m.key_store().path(), std::path::Path::new("certificates/sslkeystore.jks"));
  assert!(SslOptions::trust_store(&m).is_some());
  assert!(m.with_open_ssl(true).use_open_ssl());
}

#[test]
fn plain_configuration_may_lack_stores() {
  let c = SslConfiguration::new(None, Some(store("truststore")), true);
  assert!(c.key_store().is_none());
  assert!(c.use_open_ssl());
  match MutualSslConfiguration::try_from(c) {
    Err(ConfigError::MissingStore(which)) => assert_eq!(which, "keyStore"),
    other => panic!("expected missing key store, got {:?}", other),
  }
}

#[test]
fn mutual_converts_both_ways() {
  let m = MutualSslConfiguration::new(store("a"), store("b"), true);
  let plain: SslConfiguration = m.clone().into();
  assert_eq!(MutualSslConfiguration::try_from(plain).expect("both stores present"), m);
}

#[test]
fn loads_from_json() {
  let text = r#"{
    "keyStore": {"path": "k.jks", "storePassword": "s", "entryPassword": "e"},
    "trustStore": {"path": "t.jks", "storePassword": "s", "entryPassword": "e"}
  }"#;
  let c = SslConfiguration::from_json(text).expect("json");
  assert!(!c.use_open_ssl());
  assert_eq!(c.trust_store().unwrap().path(), std::path::Path::new("t.jks"));
  assert!(MutualSslConfiguration::from_json(r#"{"keyStore": {"path": "k", "storePassword": "", "entryPassword": ""}}"#).is_err());
}

#[test]
fn passwords_hidden_from_debug() {
  let dbg = format!("{:?}", store("k"));
  assert!(!dbg.contains("cordacadevpass"));
  assert!(dbg.contains("k.jks"));
  assert_eq!(DEFAULT_SSL_HANDSHAKE_TIMEOUT.as_millis(), 60_000);
}
