//! Transaction building helpers.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use solana_sdk::hash::Hash;
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_instruction;

/// Build the zero-lamport self-transfer used only to ask the node for a fee
/// quote. It has the same shape (one signer, one transfer) as the real sweep.
pub fn build_fee_probe_message(sender: &Pubkey, blockhash: &Hash) -> Message {
    build_transfer_message(sender, sender, 0, blockhash)
}

/// Build an unsigned transfer message with `sender` as fee payer.
pub fn build_transfer_message(
    sender: &Pubkey,
    recipient: &Pubkey,
    lamports: u64,
    blockhash: &Hash,
) -> Message {
    let ix = system_instruction::transfer(sender, recipient, lamports);
    Message::new_with_blockhash(&[ix], Some(sender), blockhash)
}

/// Serialize a message and base64-encode it (standard alphabet, padded), the
/// form browser wallets accept for signing.
pub fn encode_message_base64(message: &Message) -> String {
    STANDARD.encode(message.serialize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::system_instruction::SystemInstruction;
    use solana_sdk::system_program;

    fn sender() -> Pubkey {
        Pubkey::new_from_array([1u8; 32])
    }

    fn transfer_of(msg: &Message) -> SystemInstruction {
        assert_eq!(msg.instructions.len(), 1);
        bincode::deserialize(&msg.instructions[0].data).unwrap()
    }

    #[test]
    fn fee_probe_is_zero_self_transfer() {
        let hash = Hash::new_from_array([4u8; 32]);
        let msg = build_fee_probe_message(&sender(), &hash);

        assert_eq!(transfer_of(&msg), SystemInstruction::Transfer { lamports: 0 });
        // Sender appears once, as fee payer and both transfer accounts.
        assert_eq!(msg.account_keys, vec![sender(), system_program::id()]);
        assert_eq!(msg.instructions[0].accounts, vec![0, 0]);
        assert_eq!(msg.header.num_required_signatures, 1);
        assert_eq!(msg.recent_blockhash, hash);
    }

    #[test]
    fn transfer_targets_recipient() {
        let recipient = Pubkey::new_from_array([2u8; 32]);
        let msg = build_transfer_message(&sender(), &recipient, 3_104_120, &Hash::default());

        assert_eq!(
            transfer_of(&msg),
            SystemInstruction::Transfer {
                lamports: 3_104_120
            }
        );
        assert_eq!(
            msg.account_keys,
            vec![sender(), recipient, system_program::id()]
        );
        assert_eq!(msg.instructions[0].accounts, vec![0, 1]);
    }

    #[test]
    fn base64_decodes_back_to_message() {
        let msg = build_fee_probe_message(&sender(), &Hash::new_from_array([9u8; 32]));
        let b64 = encode_message_base64(&msg);

        let bytes = STANDARD.decode(&b64).unwrap();
        assert_eq!(bytes, msg.serialize());
        let decoded: Message = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, msg);
    }
}
