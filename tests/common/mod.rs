// Shared test fixtures.
//
// The certificate below is a self-contained client certificate used across
// the integration tests. Its known identity fields:
//   subject: C=LU, ST=LU, L=Hollerich, O=admins, CN=philippe
//   issuer:  C=US, ST=CA, L=San Franciscos, O=My Company, CN=Client CA
//   serial:  696d7748af5bf4da6a6437619543a6d4f6c53dfc
//   valid:   2025-01-06T10:20:05Z .. 2026-01-06T10:20:05Z
//   sigalg:  sha256WithRSAEncryption

#[allow(dead_code)] // Not every test file uses every fixture
pub const CLIENT_CERT_PEM: &str = "-----BEGIN CERTIFICATE-----
MIIDfjCCAmagAwIBAgIUaW13SK9b9NpqZDdhlUOm1PbFPfwwDQYJKoZIhvcNAQEL
BQAwXDELMAkGA1UEBhMCVVMxCzAJBgNVBAgMAkNBMRcwFQYDVQQHDA5TYW4gRnJh
bmNpc2NvczETMBEGA1UECgwKTXkgQ29tcGFueTESMBAGA1UEAwwJQ2xpZW50IENB
MB4XDTI1MDEwNjEwMjAwNVoXDTI2MDEwNjEwMjAwNVowUjELMAkGA1UEBhMCTFUx
CzAJBgNVBAgMAkxVMRIwEAYDVQQHDAlIb2xsZXJpY2gxDzANBgNVBAoMBmFkbWlu
czERMA8GA1UEAwwIcGhpbGlwcGUwggEiMA0GCSqGSIb3DQEBAQUAA4IBDwAwggEK
AoIBAQCmpai47IEvSEqZiQSFJwNKoW4Qc9brH8OPLRpZVT515P4deWpGZHVHB59w
q1OHdyO2I7UBZEEjYqQh5TPopMqudJIP341GfEXbGNpBx5I2fGpXYnMgmgRdoyKb
s5CM6or5V8iDqTR95Zk+1FyyDWpUPt/JJ3JemJngE4IpPLf+TY1lbinKevFxecRV
rT3H/Dg4SrCq+hurmnFwQNKYOxFYHb5m/NJUtITDsS+jDsWGWIqQPPqgjnDMlmth
ClpSfZQRLLf610UAREcePPGcD73XZDQ3KxJQn3ZBu5u3tze1svt6VBXZvYiMXgAm
4SKmvavCvaeZBjeMkb5FrZpSrziNAgMBAAGjQjBAMB0GA1UdDgQWBBROjANAJ9EZ
ZVSNIneM6YWameUinDAfBgNVHSMEGDAWgBTmWLkSfI/ltvmnt73hWPZ2jJIQKjAN
BgkqhkiG9w0BAQsFAAOCAQEAJPacFTGSzjCkT6dTQGpJbVoCiuPiQyma1B7/gQ+Y
oyO9nonH4HsfjetN+34bvCE9nYT8DV8dk02oVPxoTLU33WygzTopvUi+4Qz5bjiZ
TpN8PBMfl7Mhd0YhPjsebVuG+yLXO5wFi1K81En8FOCRL/CjHB1ZzufLdTrmnl+2
LIoJPrvP5ZvHr/s1ygf2MapkbvEGUp8r52oY6lQ9wElD5d4JuIrDj3cofd+iVaMj
rpdFlMhx4o4OfMqZ/iyi+tDJmBY750FtJRjY4uUKgEW0vdTExlJL9PqmedGtRegO
BgnxbMXuvf2GlDDhbWOs3/ColqqwqUrkQXH1XxX47a0GCQ==
-----END CERTIFICATE-----
";

/// Expected lowercase hex serial of [`CLIENT_CERT_PEM`].
#[allow(dead_code)]
pub const CLIENT_CERT_SERIAL: &str = "696d7748af5bf4da6a6437619543a6d4f6c53dfc";

/// Decodes the fixture PEM to its DER bytes.
#[allow(dead_code)]
pub fn client_cert_der() -> Vec<u8> {
    let (_, pem) = x509_parser::pem::parse_x509_pem(CLIENT_CERT_PEM.as_bytes())
        .expect("fixture PEM must parse");
    pem.contents
}
